use indexmap::IndexMap;
use tracing::warn;

/// Grants access to staff-facing commands.
pub const STAFF: &str = "workshop.staff";
/// Grants access to feature toggles.
pub const ADMIN: &str = "workshop.admin";

/// Name of the sender that implicitly holds every permission.
pub const CONSOLE: &str = "console";

#[derive(Debug, Clone)]
enum PathSegment {
    WildCard,
    Named(String),
}

#[derive(Debug, Clone)]
struct PermissionNode {
    path: Vec<PathSegment>,
    value: bool,
}

impl PermissionNode {
    fn parse(pattern: &str) -> Option<PermissionNode> {
        let pattern = pattern.trim();
        let (value, name) = match pattern.strip_prefix('-') {
            Some(rest) => (false, rest),
            None => (true, pattern),
        };
        if name.is_empty() {
            return None;
        }
        let path = name
            .split('.')
            .map(|s| match s {
                "*" => PathSegment::WildCard,
                s => PathSegment::Named(s.to_owned()),
            })
            .collect();
        Some(PermissionNode { path, value })
    }

    fn matches(&self, permission: &str) -> bool {
        let mut segments = permission.split('.');
        for expected in &self.path {
            match expected {
                PathSegment::WildCard => return true,
                PathSegment::Named(name) => match segments.next() {
                    Some(segment) if segment == name => {}
                    _ => return false,
                },
            }
        }
        segments.next().is_none()
    }
}

/// The capability set of one sender: a list of dotted permission patterns.
///
/// `workshop.*` grants everything below `workshop`, `-workshop.admin` revokes
/// a permission even when a wildcard would grant it.
#[derive(Debug, Clone, Default)]
pub struct PermissionSet {
    nodes: Vec<PermissionNode>,
}

impl PermissionSet {
    pub fn none() -> PermissionSet {
        PermissionSet::default()
    }

    pub fn all() -> PermissionSet {
        PermissionSet::from_patterns(["*"])
    }

    pub fn from_patterns<I, S>(patterns: I) -> PermissionSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = PermissionSet::default();
        for pattern in patterns {
            set.insert(pattern.as_ref());
        }
        set
    }

    pub fn insert(&mut self, pattern: &str) {
        match PermissionNode::parse(pattern) {
            Some(node) => self.nodes.push(node),
            None => warn!("Ignoring empty permission pattern `{}`", pattern),
        }
    }

    pub fn get_node_val(&self, name: &str) -> Option<bool> {
        let mut granted = None;
        for node in &self.nodes {
            if node.matches(name) {
                if !node.value {
                    return Some(false);
                }
                granted = Some(true);
            }
        }
        granted
    }

    pub fn has(&self, name: &str) -> bool {
        self.get_node_val(name).unwrap_or(false)
    }
}

/// Resolves sender names to capability sets through named groups.
#[derive(Debug, Clone, Default)]
pub struct PermissionRegistry {
    groups: IndexMap<String, Vec<String>>,
    senders: IndexMap<String, Vec<String>>,
}

impl PermissionRegistry {
    pub fn new(
        groups: IndexMap<String, Vec<String>>,
        senders: IndexMap<String, Vec<String>>,
    ) -> PermissionRegistry {
        PermissionRegistry { groups, senders }
    }

    /// Senders that have groups assigned.
    pub fn senders(&self) -> impl Iterator<Item = &str> {
        self.senders.keys().map(String::as_str)
    }

    pub fn for_sender(&self, name: &str) -> PermissionSet {
        if name.eq_ignore_ascii_case(CONSOLE) {
            return PermissionSet::all();
        }
        let mut set = PermissionSet::none();
        let Some(groups) = self.senders.get(name) else {
            return set;
        };
        for group in groups {
            match self.groups.get(group) {
                Some(patterns) => {
                    for pattern in patterns {
                        set.insert(pattern);
                    }
                }
                None => warn!("Sender `{}` refers to unknown group `{}`", name, group),
            }
        }
        set
    }
}
