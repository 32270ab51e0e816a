#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Isolated environment: an empty `PATH` directory for fake binaries,
/// a project directory and a private home.
pub struct Sandbox {
    pub bin: TempDir,
    pub project: TempDir,
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            bin: TempDir::new().unwrap(),
            project: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
        }
    }

    /// Install an executable shell script named `name` on the sandbox `PATH`.
    #[cfg(unix)]
    pub fn fake_bin(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// A package manager that answers `--version` with `version` and
    /// records any other invocation in `<cwd>/<name>.args`.
    #[cfg(unix)]
    pub fn fake_manager(&self, name: &str, version: &str) {
        self.fake_bin(
            name,
            &format!(
                "if [ \"$1\" = \"--version\" ]; then echo {version}; exit 0; fi\n\
                 echo \"$@\" > {name}.args",
                version = version,
                name = name
            ),
        );
    }

    pub fn touch(&self, relative: &str) {
        let path = self.project.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    pub fn recorded_args(&self, name: &str) -> String {
        fs::read_to_string(self.project.path().join(format!("{}.args", name)))
            .unwrap()
            .trim_end()
            .to_string()
    }

    /// `pmdetect --cwd <project>` with only the sandbox binaries visible.
    pub fn pmdetect(&self) -> Command {
        self.pmdetect_in(self.project.path())
    }

    /// `pmdetect --cwd <dir>` with only the sandbox binaries visible.
    pub fn pmdetect_in(&self, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("pmdetect").unwrap();
        cmd.env_clear()
            .env("PATH", self.bin.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .arg("--cwd")
            .arg(dir);
        cmd
    }

    pub fn project_path(&self) -> &Path {
        self.project.path()
    }
}
