//! Fixed stub data used by the execution tests.

use crate::test::models::SimpleTypes;
use crate::test::models::User;
use uuid::Uuid;

pub(crate) fn users() -> Vec<User> {
    vec![
        User {
            id: Uuid::parse_str("b6214ea0-fc5a-493c-91ea-939e17b2e95f").unwrap(),
            name: "John".to_string(),
            email: "john@mail.com".to_string(),
            delete_field: 1,
        },
        User {
            id: Uuid::parse_str("c682a4c5-e66b-4dbf-a077-d97579c308dc").unwrap(),
            name: "Doe".to_string(),
            email: "doe@mail.com".to_string(),
            delete_field: 2,
        },
    ]
}

pub(crate) fn simple_types() -> Vec<SimpleTypes> {
    vec![
        SimpleTypes {
            int: 1,
            int_null: Some(2),
            long: 3,
            long_null: Some(4),
            float: 5.1,
            float_null: Some(5.2),
            double: 6.1,
            double_null: Some(6.2),
            string: "val".to_string(),
            string_null: Some("null val".to_string()),
            uuid: Uuid::parse_str("dac5310f-484b-4f81-9756-bce0349ceaa5").unwrap(),
            uuid_null: Some(Uuid::parse_str("acb53d26-3cba-4177-ba54-88232b5066c5").unwrap()),
            user: Some(users()[0].clone()),
        },
        SimpleTypes {
            int: 10,
            int_null: None,
            long: 30,
            long_null: None,
            float: 50.1,
            float_null: None,
            double: 60.1,
            double_null: None,
            string: "val2".to_string(),
            string_null: None,
            uuid: Uuid::parse_str("0e4dd4f3-4c01-4ad8-8cc5-97dbb2a6ba5e").unwrap(),
            uuid_null: None,
            user: None,
        },
        SimpleTypes {
            int: 100,
            int_null: Some(200),
            long: 300,
            long_null: None,
            float: 500.1,
            float_null: None,
            double: 600.1,
            double_null: None,
            string: "val3".to_string(),
            string_null: None,
            uuid: Uuid::parse_str("9bd5bfc9-a4c0-4d26-9c2a-1a4b5b51a0a3").unwrap(),
            uuid_null: None,
            user: None,
        },
    ]
}
