use serde_json::json;
use std::sync::Arc;
use std::thread;
use user_schemas::{UserBase, UserCreate, UserOut, UserService, ValidationError};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_schema_types_are_send_and_sync() {
    assert_send_sync::<UserBase>();
    assert_send_sync::<UserCreate>();
    assert_send_sync::<UserOut>();
    assert_send_sync::<ValidationError>();
    assert_send_sync::<UserService>();
}

#[test]
fn test_validate_create_from_many_threads() {
    let service = Arc::new(UserService::new());

    let handles: Vec<_> = (0..8i64)
        .map(|i| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for j in 0..100 {
                    let age = i * 100 + j;
                    let raw = json!({"name": format!("user{}", age), "age": age.to_string(), "email": "u@x.com"});
                    let user = service.validate_create(&raw).unwrap();
                    assert_eq!(user.age, age);

                    let mut stored = raw;
                    stored["id"] = json!(age);
                    let out = service.serialize_out(&stored).unwrap();
                    assert_eq!(out.base, user.base);

                    let err = service.validate_create(&json!({"name": "x"})).unwrap_err();
                    assert_eq!(err.errors().len(), 2);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
