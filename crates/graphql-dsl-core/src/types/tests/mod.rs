mod field_builder_tests;
mod object_type_builder_tests;
mod type_annotation_tests;
