use campus_core::services::{NewClient, NewGroup, NewProject, NewUser};
use campus_core::ProjectStatus;

pub fn new_client(name: &str) -> NewClient {
    NewClient {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "555-0100".to_string(),
    }
}

pub fn new_project(name: &str, client_id: i32) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: format!("{name} description"),
        status: ProjectStatus::default(),
        client_id,
    }
}

pub fn new_group(group_name: &str, class_name: &str, class_number: &str) -> NewGroup {
    NewGroup {
        group_name: group_name.to_string(),
        class_name: class_name.to_string(),
        class_number: class_number.to_string(),
        email: "founder@campus.edu".to_string(),
        time: "Mon 10:00".to_string(),
        longitude: -73.1235,
        latitude: 40.9126,
    }
}

pub fn new_user(user_name: &str, email: &str) -> NewUser {
    NewUser {
        user_name: user_name.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: email.to_string(),
        password_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
    }
}
