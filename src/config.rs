use std::ffi::OsString;
use std::path::PathBuf;

use crate::data::geo::Role;

/// Environment variable naming the dataset to open at startup.
pub const DATASET_ENV: &str = "LONGHAUL_DATASET";
/// Environment variable choosing the initial density role (`pickup`/`dropoff`).
pub const ROLE_ENV: &str = "LONGHAUL_ROLE";

/// Startup settings gathered from the command line and environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardConfig {
    /// Dataset opened before the first frame, if any.
    pub dataset_path: Option<PathBuf>,
    /// Initial density map role.
    pub role: Role,
}

impl DashboardConfig {
    /// First CLI argument wins over `LONGHAUL_DATASET`.
    pub fn from_env() -> Self {
        Self::from_sources(
            std::env::args_os().nth(1),
            std::env::var_os(DATASET_ENV),
            std::env::var(ROLE_ENV).ok(),
        )
    }

    fn from_sources(
        arg: Option<OsString>,
        env_path: Option<OsString>,
        role: Option<String>,
    ) -> Self {
        let dataset_path = arg
            .or(env_path)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let role = match role.as_deref() {
            None => Role::default(),
            Some(raw) => Role::parse(raw).unwrap_or_else(|| {
                log::warn!("Ignoring {ROLE_ENV}={raw:?}; expected pickup or dropoff");
                Role::default()
            }),
        };

        DashboardConfig { dataset_path, role }
    }
}
