//! Production `LocalityGuard`.

use crate::application::ports::LocalityGuard;
use crate::domain::locality::is_local_docker_desktop;

/// Applies the Docker Desktop endpoint rules from `crate::domain::locality`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopLocality;

impl LocalityGuard for DesktopLocality {
    fn is_local(&self, docker_host: &str, os: &str) -> bool {
        is_local_docker_desktop(docker_host, os)
    }
}
