use anyhow::{bail, Context, Result};
use matgo_core::{ProfileStore, Settings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PROFILE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfileDoc {
    version: u32,
    #[serde(default)]
    settings: Settings,
    #[serde(default)]
    coins: u64,
}

impl Default for ProfileDoc {
    fn default() -> Self {
        Self {
            version: PROFILE_SCHEMA_VERSION,
            settings: Settings::default(),
            coins: 0,
        }
    }
}

/// Resolves the profile location: `MATGO_PROFILE` wins, then a dotfile in
/// the home directory.
pub fn default_profile_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("MATGO_PROFILE") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".matgo_profile.json"))
}

/// JSON-document profile store. Read/write failures degrade: loads fall
/// back to defaults, writes are logged and dropped, so the engine never
/// sees a persistence error.
#[derive(Debug)]
pub struct FileProfile {
    path: PathBuf,
    doc: ProfileDoc,
}

impl FileProfile {
    /// Opens the profile at `path`, starting from defaults when the file is
    /// missing, unreadable or from an unknown schema version.
    pub fn open(path: PathBuf) -> Self {
        let doc = match read_doc(&path) {
            Ok(doc) => doc,
            Err(err) => {
                log::warn!("profile {} unreadable, using defaults: {err:#}", path.display());
                ProfileDoc::default()
            }
        };
        Self { path, doc }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<()> {
        let body = serde_json::to_string_pretty(&self.doc)?;
        fs::write(&self.path, body)
            .with_context(|| format!("writing profile {}", self.path.display()))?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(err) = self.write() {
            log::warn!("profile save failed: {err:#}");
        }
    }
}

fn read_doc(path: &Path) -> Result<ProfileDoc> {
    if !path.exists() {
        return Ok(ProfileDoc::default());
    }
    let body = fs::read_to_string(path)
        .with_context(|| format!("reading profile {}", path.display()))?;
    let doc: ProfileDoc = serde_json::from_str(&body).context("parsing profile document")?;
    if doc.version != PROFILE_SCHEMA_VERSION {
        bail!(
            "unsupported profile version {} (expected {})",
            doc.version,
            PROFILE_SCHEMA_VERSION
        );
    }
    Ok(doc)
}

impl ProfileStore for FileProfile {
    fn load(&self) -> Settings {
        self.doc.settings.clone()
    }

    fn save(&mut self, settings: &Settings) {
        self.doc.settings = settings.clone();
        self.persist();
    }

    fn add_coins(&mut self, amount: u64) -> u64 {
        self.doc.coins = self.doc.coins.saturating_add(amount);
        self.persist();
        self.doc.coins
    }

    fn coins(&self) -> u64 {
        self.doc.coins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_file() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "matgo_profile_test_{}_{}.json",
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn settings_and_coins_round_trip() {
        let file = unique_temp_file();
        {
            let mut profile = FileProfile::open(file.clone());
            let mut settings = profile.load();
            settings.difficulty = "hard".to_string();
            settings.high_contrast = true;
            profile.save(&settings);
            assert_eq!(profile.add_coins(200), 200);
            assert_eq!(profile.add_coins(10), 210);
        }
        let profile = FileProfile::open(file.clone());
        assert_eq!(profile.load().difficulty, "hard");
        assert!(profile.load().high_contrast);
        assert_eq!(profile.coins(), 210);
        let _ = fs::remove_file(file);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let file = unique_temp_file();
        let profile = FileProfile::open(file);
        assert_eq!(profile.load(), Settings::default());
        assert_eq!(profile.coins(), 0);
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let file = unique_temp_file();
        fs::write(&file, "{not json").expect("write");
        let profile = FileProfile::open(file.clone());
        assert_eq!(profile.load(), Settings::default());
        let _ = fs::remove_file(file);
    }

    #[test]
    fn unknown_version_loads_defaults() {
        let file = unique_temp_file();
        fs::write(&file, r#"{"version":99,"coins":5}"#).expect("write");
        let profile = FileProfile::open(file.clone());
        assert_eq!(profile.coins(), 0);
        let _ = fs::remove_file(file);
    }
}
