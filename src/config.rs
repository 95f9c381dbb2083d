use std::fs;
use std::time::Duration;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub min_floor: i32,
    pub max_floor: i32,
    pub elevator_count: usize,
    pub between_floors_delay_ms: u64,
    pub doors_open_close_delay_ms: u64,
    pub between_user_actions_delay_ms: u64,
    pub concurrency_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            min_floor: 0,
            max_floor: 9,
            elevator_count: 3,
            between_floors_delay_ms: 1000,
            doors_open_close_delay_ms: 2000,
            between_user_actions_delay_ms: 10000,
            concurrency_limit: 5,
        }
    }
}

impl Settings {
    pub fn get() -> Self {
        let file_path = "config.json";
        let settings = match fs::read_to_string(file_path) {
            Ok(content) => serde_json::from_str(&content).unwrap(),
            Err(_) => {
                println!("No configuration file provided, using default settings...");
                Settings::default()
            },
        };
        settings.validate();
        settings
    }

    // Misconfiguration is a programming/deployment error, not a runtime one.
    pub fn validate(&self) {
        assert!(self.min_floor < self.max_floor, "min_floor must be below max_floor");
        assert!(self.elevator_count > 0, "elevator_count must be at least 1");
        assert!(self.concurrency_limit > 0, "concurrency_limit must be at least 1");
    }

    pub fn between_floors_delay(&self) -> Duration {
        Duration::from_millis(self.between_floors_delay_ms)
    }

    pub fn doors_open_close_delay(&self) -> Duration {
        Duration::from_millis(self.doors_open_close_delay_ms)
    }

    pub fn between_user_actions_delay(&self) -> Duration {
        Duration::from_millis(self.between_user_actions_delay_ms)
    }
}
