//! Installation planning.
//!
//! Components are installed after everything in their `preinstalls` list.
//! Preinstalls that are not part of the plan are ignored. A component whose
//! installed version (as recorded in the `Manifest`) is exactly the required
//! version is skipped unless a reinstall is forced. Skipping is decided per
//! component: a reinstalled component does not force its dependents.

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::DfsPostOrder;

use crate::core::errors::DeployError;
use crate::core::version::VersionNumber;
use crate::sysroot::manifest::Manifest;

/// Something that can be placed in an install plan.
pub trait Installable {
    fn name(&self) -> &str;
    fn version(&self) -> &VersionNumber;
    fn preinstalls(&self) -> Vec<String>;
}

/// What to do with one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    /// The required version is already installed.
    Skip,
}

/// One step of an install plan, referring to a component by its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub index: usize,
    pub action: Action,
}

/// The ordered steps of an installation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallPlan {
    pub steps: Vec<Step>,
}

impl InstallPlan {
    /// The indices of the components that will actually be installed.
    pub fn to_install(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps
            .iter()
            .filter(|s| s.action == Action::Install)
            .map(|s| s.index)
    }

    /// Check if the plan has nothing to install.
    pub fn is_noop(&self) -> bool {
        self.to_install().next().is_none()
    }
}

/// Order `selected` components so each comes after its preinstalls.
///
/// Ties are broken by the order of `selected`, which is the order the
/// components appear in the specification.
pub fn order<T: Installable>(
    components: &[T],
    selected: &[usize],
) -> Result<Vec<usize>, DeployError> {
    let mut graph: DiGraph<usize, ()> = DiGraph::new();
    let mut nodes: HashMap<&str, NodeIndex> = HashMap::new();

    for &index in selected {
        let node = graph.add_node(index);
        nodes.insert(components[index].name(), node);
    }

    // Edges point from a component to its preinstalls. The traversal visits
    // the most recently added edge last, so preinstalls go in declared order.
    for &index in selected {
        let from = nodes[components[index].name()];
        for preinstall in components[index].preinstalls().iter() {
            if let Some(&to) = nodes.get(preinstall.as_str()) {
                graph.update_edge(from, to, ());
            }
        }
    }

    if let Some(cycle) = find_cycle(&graph, components) {
        return Err(DeployError::DependencyCycle { cycle });
    }

    let mut order = Vec::with_capacity(selected.len());
    let mut dfs = DfsPostOrder::empty(&graph);

    for &index in selected {
        let start = nodes[components[index].name()];
        if dfs.discovered.contains(start.index()) {
            continue;
        }

        dfs.move_to(start);
        while let Some(node) = dfs.next(&graph) {
            order.push(graph[node]);
        }
    }

    Ok(order)
}

/// Return the names along a cycle, with the first name repeated at the end.
fn find_cycle<T: Installable>(graph: &DiGraph<usize, ()>, components: &[T]) -> Option<Vec<String>> {
    let scc = tarjan_scc(graph).into_iter().find(|scc| {
        scc.len() > 1 || graph.contains_edge(scc[0], scc[0])
    })?;

    // Search the component from its earliest node for a way back to it.
    let start = *scc.iter().min()?;
    let mut path = vec![start];
    let path = extend_to(graph, &scc, start, &mut path)?;

    let mut names: Vec<String> = path
        .iter()
        .map(|&n| components[graph[n]].name().to_string())
        .collect();
    names.push(components[graph[start]].name().to_string());

    Some(names)
}

fn extend_to(
    graph: &DiGraph<usize, ()>,
    scc: &[NodeIndex],
    start: NodeIndex,
    path: &mut Vec<NodeIndex>,
) -> Option<Vec<NodeIndex>> {
    let current = *path.last()?;

    for next in graph.neighbors(current).filter(|n| scc.contains(n)) {
        if next == start {
            return Some(path.clone());
        }
        if path.contains(&next) {
            continue;
        }

        path.push(next);
        if let Some(found) = extend_to(graph, scc, start, path) {
            return Some(found);
        }
        path.pop();
    }

    None
}

/// Plan the installation of `selected` components.
pub fn plan<T: Installable>(
    components: &[T],
    selected: &[usize],
    manifest: &Manifest,
    force: bool,
) -> Result<InstallPlan, DeployError> {
    let steps = order(components, selected)?
        .into_iter()
        .map(|index| {
            let component = &components[index];
            let installed = manifest.get(component.name());

            let action = if !force && installed == Some(component.version()) {
                Action::Skip
            } else {
                Action::Install
            };

            Step { index, action }
        })
        .collect();

    Ok(InstallPlan { steps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;

    struct Fake {
        name: &'static str,
        version: VersionNumber,
        preinstalls: Vec<&'static str>,
    }

    impl Installable for Fake {
        fn name(&self) -> &str {
            self.name
        }

        fn version(&self) -> &VersionNumber {
            &self.version
        }

        fn preinstalls(&self) -> Vec<String> {
            self.preinstalls.iter().map(|p| p.to_string()).collect()
        }
    }

    fn fake(name: &'static str, preinstalls: &[&'static str]) -> Fake {
        Fake {
            name,
            version: "1.0".parse().unwrap(),
            preinstalls: preinstalls.to_vec(),
        }
    }

    fn names(components: &[Fake], order: &[usize]) -> Vec<&'static str> {
        order.iter().map(|&i| components[i].name).collect()
    }

    #[test]
    fn test_preinstalls_come_first() {
        let components = vec![
            fake("PyQt5", &["Python", "Qt", "SIP"]),
            fake("Python", &[]),
            fake("Qt", &["OpenSSL", "zlib"]),
            fake("SIP", &["Python", "Qt"]),
            fake("zlib", &[]),
        ];

        let order = order(&components, &[0, 1, 2, 3, 4]).unwrap();
        assert_eq!(
            names(&components, &order),
            vec!["Python", "zlib", "Qt", "SIP", "PyQt5"]
        );
    }

    #[test]
    fn test_missing_preinstalls_are_ignored() {
        let components = vec![fake("A", &["B"]), fake("C", &[])];

        let order = order(&components, &[0, 1]).unwrap();
        assert_eq!(names(&components, &order), vec!["A", "C"]);
    }

    #[test]
    fn test_selection_is_ordered_among_itself() {
        let components = vec![fake("A", &["B"]), fake("B", &["C"]), fake("C", &[])];

        let order = order(&components, &[0, 2]).unwrap();
        assert_eq!(names(&components, &order), vec!["A", "C"]);
    }

    #[test]
    fn test_cycle_is_named() {
        let components = vec![fake("A", &["B"]), fake("B", &["A"])];

        let err = order(&components, &[0, 1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.to_string(), "dependency cycle detected: A -> B -> A");
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let components = vec![fake("A", &["A"])];

        let err = order(&components, &[0]).unwrap_err();
        assert_eq!(err.to_string(), "dependency cycle detected: A -> A");
    }

    #[test]
    fn test_skip_only_exact_version() {
        let mut components = vec![fake("Python", &[]), fake("Qt", &["Python"])];
        components[0].version = "3.7.8".parse().unwrap();

        let mut manifest = Manifest::default();
        manifest.insert("Python", "3.7.7".parse().unwrap());
        manifest.insert("Qt", "1.0".parse().unwrap());

        let plan = plan(&components, &[0, 1], &manifest, false).unwrap();
        assert_eq!(
            plan.steps,
            vec![
                Step { index: 0, action: Action::Install },
                Step { index: 1, action: Action::Skip },
            ]
        );
        assert!(!plan.is_noop());
    }

    #[test]
    fn test_force_installs_everything() {
        let components = vec![fake("zlib", &[])];
        let mut manifest = Manifest::default();
        manifest.insert("zlib", "1.0".parse().unwrap());

        assert!(plan(&components, &[0], &manifest, false).unwrap().is_noop());
        assert!(!plan(&components, &[0], &manifest, true).unwrap().is_noop());
    }
}
