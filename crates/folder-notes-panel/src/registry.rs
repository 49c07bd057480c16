use log::info;

/// Host-assigned identifier of a panel surface (a sidebar leaf)
pub type SurfaceId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// This surface is the panel
    Primary,
    /// Another surface already hosts the panel; detach this one
    Duplicate { primary: SurfaceId },
}

/// Keeps at most one panel surface alive
#[derive(Debug, Default)]
pub struct PanelRegistry {
    primary: Option<SurfaceId>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(&self) -> Option<SurfaceId> {
        self.primary
    }

    pub fn register(&mut self, surface: SurfaceId) -> Registration {
        match self.primary {
            Some(primary) if primary != surface => {
                info!("surface {} duplicates panel {}", surface, primary);
                Registration::Duplicate { primary }
            }
            _ => {
                self.primary = Some(surface);
                Registration::Primary
            }
        }
    }

    /// Forget a closed surface; returns true if it was the panel.
    pub fn unregister(&mut self, surface: SurfaceId) -> bool {
        if self.primary == Some(surface) {
            self.primary = None;
            true
        } else {
            false
        }
    }

    /// Given every open surface, pick the panel and return the ones to detach.
    ///
    /// The registered panel is kept when it is still open, otherwise the first
    /// listed surface takes over.
    pub fn collapse(&mut self, open: &[SurfaceId]) -> Vec<SurfaceId> {
        let keep = match self.primary {
            Some(primary) if open.contains(&primary) => Some(primary),
            _ => open.first().copied(),
        };
        self.primary = keep;
        open.iter().copied().filter(|s| Some(*s) != keep).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_detects_duplicates() {
        let mut registry = PanelRegistry::new();
        assert_eq!(registry.register(1), Registration::Primary);
        assert_eq!(registry.register(1), Registration::Primary);
        assert_eq!(registry.register(2), Registration::Duplicate { primary: 1 });
        assert_eq!(registry.primary(), Some(1));

        assert!(!registry.unregister(2));
        assert!(registry.unregister(1));
        assert_eq!(registry.register(2), Registration::Primary);
    }

    #[test]
    fn test_collapse_keeps_one_surface() {
        let mut registry = PanelRegistry::new();
        registry.register(7);
        assert_eq!(registry.collapse(&[3, 7, 9]), vec![3, 9]);
        assert_eq!(registry.primary(), Some(7));

        // registered panel was closed by the host
        assert_eq!(registry.collapse(&[4, 5]), vec![5]);
        assert_eq!(registry.primary(), Some(4));

        assert!(registry.collapse(&[]).is_empty());
        assert_eq!(registry.primary(), None);
    }
}
