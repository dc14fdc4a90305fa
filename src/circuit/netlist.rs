//! Ordered netlist of component connections.

use super::types::NodeId;
use crate::components::Component;

/// One component connected between a positive and a negative node.
#[derive(Debug, Clone, PartialEq)]
pub struct NetlistEntry {
    /// The circuit element
    pub component: Component,
    /// Positive terminal node
    pub pos: NodeId,
    /// Negative terminal node
    pub neg: NodeId,
    /// Optional device name (e.g. "R1"), used for reporting
    pub name: Option<String>,
}

impl NetlistEntry {
    /// Create an unnamed entry.
    pub fn new(component: Component, pos: usize, neg: usize) -> Self {
        Self {
            component,
            pos: NodeId(pos),
            neg: NodeId(neg),
            name: None,
        }
    }

    /// Attach a device name to the entry.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Highest node index touched by this entry.
    pub fn max_node(&self) -> usize {
        self.pos.0.max(self.neg.0)
    }
}

/// An ordered collection of netlist entries.
///
/// Insertion order matters: the k-th voltage source encountered owns
/// branch current k in the assembled system.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Netlist {
    entries: Vec<NetlistEntry>,
}

impl Netlist {
    /// Create an empty netlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: NetlistEntry) {
        self.entries.push(entry);
    }

    /// Append an unnamed component between two nodes.
    pub fn add(
        &mut self,
        component: Component,
        pos: usize,
        neg: usize,
    ) -> &mut Self {
        self.push(NetlistEntry::new(component, pos, neg));
        self
    }

    /// Append a named component between two nodes.
    pub fn add_named(
        &mut self,
        name: impl Into<String>,
        component: Component,
        pos: usize,
        neg: usize,
    ) -> &mut Self {
        self.push(NetlistEntry::new(component, pos, neg).with_name(name));
        self
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, NetlistEntry> {
        self.entries.iter()
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[NetlistEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the netlist has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Voltage source labels in branch order.
    /// Unnamed sources are labelled `V#k` with k the branch ordinal.
    pub fn voltage_source_names(&self) -> Vec<String> {
        self.iter()
            .filter(|e| e.component.is_voltage_source())
            .enumerate()
            .map(|(k, e)| e.name.clone().unwrap_or_else(|| format!("V#{}", k)))
            .collect()
    }
}

impl FromIterator<NetlistEntry> for Netlist {
    fn from_iter<I: IntoIterator<Item = NetlistEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Netlist {
    type Item = &'a NetlistEntry;
    type IntoIter = std::slice::Iter<'a, NetlistEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_netlist_preserves_order() {
        let mut netlist = Netlist::new();
        netlist
            .add_named("R1", Component::resistor(2.0).unwrap(), 0, 1)
            .add(Component::voltage_source(32.0).unwrap(), 2, 1)
            .add_named("V2", Component::voltage_source(20.0).unwrap(), 3, 0);

        assert_eq!(netlist.len(), 3);
        assert_eq!(netlist.entries()[0].name.as_deref(), Some("R1"));
        assert_eq!(netlist.entries()[1].pos, NodeId(2));
        assert_eq!(netlist.voltage_source_names(), vec!["V#0", "V2"]);
    }

    #[test]
    fn test_entry_max_node() {
        let e = NetlistEntry::new(Component::resistor(4.0).unwrap(), 2, 3);
        assert_eq!(e.max_node(), 3);
        let e = NetlistEntry::new(Component::resistor(4.0).unwrap(), 0, 0);
        assert_eq!(e.max_node(), 0);
    }
}
