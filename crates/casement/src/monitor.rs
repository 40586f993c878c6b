//! Monitor discovery and the process-wide monitor cache
//!
//! GLFW owns monitor lifetimes and only lends out handles, so the cache
//! stores snapshots of the connected monitors rather than handles. The
//! snapshot list is populated on first query and kept current by applying
//! the connect/disconnect events GLFW reports.

use glfw::MonitorEvent;

/// Usable screen area of a monitor, excluding taskbars and docks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workarea {
    /// X position of the upper-left corner, in screen coordinates.
    pub x: i32,
    /// Y position of the upper-left corner, in screen coordinates.
    pub y: i32,
    /// Width of the work area.
    pub width: i32,
    /// Height of the work area.
    pub height: i32,
}

/// Snapshot of one connected monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorInfo {
    /// Human-readable monitor name reported by GLFW. Not guaranteed unique
    /// across identical models, but it is the only stable identity the
    /// handle exposes.
    pub name: String,
    /// Work area at the time the snapshot was taken.
    pub workarea: Workarea,
}

impl MonitorInfo {
    /// Copy the queryable state out of a live monitor handle.
    pub(crate) fn from_handle(monitor: &glfw::Monitor) -> Self {
        let (x, y, width, height) = monitor.get_workarea();
        let name = monitor.get_name().unwrap_or_else(|| {
            log::warn!("monitor reported no name");
            String::new()
        });
        Self {
            name,
            workarea: Workarea {
                x,
                y,
                width,
                height,
            },
        }
    }
}

/// One monitor configuration change, captured inside the GLFW callback
/// while the handle is still valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MonitorChange {
    /// A monitor was connected; carries its snapshot.
    Connected(MonitorInfo),
    /// A monitor was disconnected. GLFW may no longer be able to report a
    /// name for it, hence the `Option`.
    Disconnected(Option<String>),
}

impl MonitorChange {
    pub(crate) fn capture(monitor: &glfw::Monitor, event: MonitorEvent) -> Self {
        match event {
            MonitorEvent::Connected => Self::Connected(MonitorInfo::from_handle(monitor)),
            MonitorEvent::Disconnected => Self::Disconnected(monitor.get_name()),
        }
    }
}

/// Lazily populated list of connected monitors.
///
/// `initialized` is the latch that makes the first query take a full
/// snapshot; an unattributable disconnect clears it so the next query
/// rebuilds instead of guessing which entry to drop.
#[derive(Debug, Default)]
pub(crate) struct MonitorCache {
    monitors: Vec<MonitorInfo>,
    initialized: bool,
}

impl MonitorCache {
    pub(crate) fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Replace the cache contents with a fresh snapshot.
    pub(crate) fn repopulate(&mut self, monitors: Vec<MonitorInfo>) {
        log::debug!("monitor cache populated with {} monitor(s)", monitors.len());
        self.monitors = monitors;
        self.initialized = true;
    }

    /// Apply one configuration change to the cached list.
    pub(crate) fn apply(&mut self, change: MonitorChange) {
        match change {
            MonitorChange::Connected(info) => {
                log::info!("monitor connected: {}", info.name);
                self.monitors.push(info);
            }
            MonitorChange::Disconnected(Some(name)) => {
                match self.monitors.iter().position(|m| m.name == name) {
                    Some(index) => {
                        self.monitors.remove(index);
                        log::info!("monitor disconnected: {}", name);
                    }
                    None => {
                        log::warn!("disconnect event for unknown monitor: {}", name);
                    }
                }
            }
            MonitorChange::Disconnected(None) => {
                log::warn!("disconnect event for unidentifiable monitor; rebuilding cache");
                self.initialized = false;
            }
        }
    }

    pub(crate) fn as_slice(&self) -> &[MonitorInfo] {
        &self.monitors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> MonitorInfo {
        MonitorInfo {
            name: name.to_string(),
            workarea: Workarea {
                x: 0,
                y: 0,
                width: 1920,
                height: 1080,
            },
        }
    }

    fn names(cache: &MonitorCache) -> Vec<&str> {
        cache.as_slice().iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_repopulate_replaces_contents() {
        let mut cache = MonitorCache::default();
        cache.repopulate(vec![info("a"), info("b")]);
        assert!(cache.is_initialized());
        assert_eq!(names(&cache), vec!["a", "b"]);

        cache.repopulate(vec![info("c")]);
        assert_eq!(names(&cache), vec!["c"]);
    }

    #[test]
    fn test_connect_appends_exactly_one() {
        let mut cache = MonitorCache::default();
        cache.repopulate(vec![info("a")]);

        cache.apply(MonitorChange::Connected(info("b")));
        assert_eq!(names(&cache), vec!["a", "b"]);
    }

    #[test]
    fn test_disconnect_removes_the_matching_entry() {
        let mut cache = MonitorCache::default();
        cache.repopulate(vec![info("a"), info("b"), info("c")]);

        cache.apply(MonitorChange::Disconnected(Some("b".to_string())));
        assert_eq!(names(&cache), vec!["a", "c"]);
        assert!(cache.is_initialized());
    }

    #[test]
    fn test_disconnect_for_unknown_monitor_changes_nothing() {
        let mut cache = MonitorCache::default();
        cache.repopulate(vec![info("a")]);

        cache.apply(MonitorChange::Disconnected(Some("ghost".to_string())));
        assert_eq!(names(&cache), vec!["a"]);
        assert!(cache.is_initialized());
    }

    #[test]
    fn test_disconnect_of_duplicate_name_removes_first_match() {
        let mut cache = MonitorCache::default();
        cache.repopulate(vec![info("dup"), info("dup")]);

        cache.apply(MonitorChange::Disconnected(Some("dup".to_string())));
        assert_eq!(names(&cache), vec!["dup"]);
    }

    #[test]
    fn test_unidentifiable_disconnect_invalidates_cache() {
        let mut cache = MonitorCache::default();
        cache.repopulate(vec![info("a")]);

        cache.apply(MonitorChange::Disconnected(None));
        assert!(!cache.is_initialized());
    }
}
