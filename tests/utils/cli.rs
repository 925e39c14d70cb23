use assert_cmd::cargo::{CargoError, CommandCargoExt};
use mock_db_service::application::configuration::composed::Configuration;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;
use std::{env, fs};
use uuid::Uuid;

pub struct CommandFactory {
    envs: HashMap<String, String>,
}

impl CommandFactory {
    pub fn new(config: &Configuration) -> CommandFactory {
        let envs = config.envs();

        CommandFactory { envs }
    }

    pub fn create(&self, bin_name: &str) -> Result<Command, CargoError> {
        let mut cmd = Command::cargo_bin(bin_name)?;
        cmd.envs(self.envs.clone());
        Ok(cmd)
    }
}

/// Scratch working directory holding env files, removed on drop.
pub struct EnvFileDirectory {
    path: PathBuf,
}

impl EnvFileDirectory {
    pub fn new(files: &[(&str, &str)]) -> EnvFileDirectory {
        let case = Uuid::new_v4().to_string().replace("-", "_");
        let path = env::temp_dir().join(format!("mock_db_service_env_{}", case));
        fs::create_dir_all(&path).unwrap();

        for (name, content) in files {
            fs::write(path.join(name), content).unwrap();
        }

        EnvFileDirectory { path }
    }

    /// `app` binary running inside the directory, with no database settings inherited.
    pub fn command(&self) -> Result<Command, CargoError> {
        let mut cmd = Command::cargo_bin("app")?;
        cmd.current_dir(&self.path);
        for name in [
            "DATABASE_URL",
            "DATABASE_ENGINE",
            "DATABASE_MAX_CONNECTIONS",
            "DATABASE_TIMEOUT_MS",
            "SQLITE_PATH",
        ] {
            cmd.env_remove(name);
        }
        Ok(cmd)
    }
}

impl Drop for EnvFileDirectory {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
