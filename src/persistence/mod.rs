use std::{
    fs,
    io,
    path::PathBuf,
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

const APP_NAME: &str = "registra";

/// Platform data dir for this app, created on first use. Falls back to the
/// working directory when the platform has no data dir.
pub fn app_data_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(data_dir) => {
            let app_dir = data_dir.join(APP_NAME);
            let _ = fs::create_dir_all(&app_dir);
            app_dir
        }
        None => PathBuf::from("."),
    }
}

pub fn data_file_path(filename: &str) -> PathBuf {
    app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(data_file_path(filename), json)
}

pub fn load_json<T: DeserializeOwned + Default>(filename: &str) -> io::Result<T> {
    let path = data_file_path(filename);
    if !path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Missing or unreadable files fall back to defaults so a bad settings file
/// never prevents startup.
pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Settings;

    #[test]
    fn data_file_path_lands_in_app_dir() {
        let path = data_file_path("settings.json");
        assert!(path.ends_with("settings.json"));
        assert!(path.parent().is_some());
    }

    #[test]
    fn persisted_settings_win_over_defaults() {
        let filename = "settings_roundtrip_test.json";
        let saved = Settings {
            student_service_url: "http://students.test:9000".to_string(),
            course_service_url: "http://courses.test:9001".to_string(),
        };
        save_json(&saved, filename).unwrap();

        let loaded = load_json_or_default::<Settings>(filename);
        assert_eq!(loaded, saved);

        let _ = fs::remove_file(data_file_path(filename));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let filename = "no_such_settings_file.json";
        let _ = fs::remove_file(data_file_path(filename));

        let loaded: Vec<String> = load_json_or_default(filename);
        assert!(loaded.is_empty());
    }
}
