use stencil_template::{AuthorNode, ComponentNode, RawValue, ID_ATTRIBUTE, STYLE_ATTRIBUTE};

/// Visitor pattern for traversing author trees immutably
///
/// This trait provides default implementations that walk the entire tree.
/// Override specific visit_* methods to perform custom actions on nodes.
pub trait Visitor: Sized {
    fn visit_node(&mut self, node: &AuthorNode) {
        walk_node(self, node);
    }

    fn visit_component(&mut self, component: &ComponentNode) {
        walk_component(self, component);
    }

    fn visit_fragment(&mut self, children: &[AuthorNode]) {
        walk_fragment(self, children);
    }

    fn visit_text(&mut self, _value: &str, _placeholder: bool) {
        // Leaf node, no children to walk
    }

    fn visit_attribute(&mut self, _name: &str, _value: &RawValue) {
        // Leaf node, no children to walk
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &AuthorNode) {
    match node {
        AuthorNode::Component(component) => visitor.visit_component(component),
        AuthorNode::Fragment(children) => visitor.visit_fragment(children),
        AuthorNode::Text { value, placeholder } => visitor.visit_text(value, *placeholder),
    }
}

pub fn walk_component<V: Visitor>(visitor: &mut V, component: &ComponentNode) {
    for (name, value) in &component.attributes {
        visitor.visit_attribute(name, value);
    }
    for child in &component.children {
        visitor.visit_node(child);
    }
}

pub fn walk_fragment<V: Visitor>(visitor: &mut V, children: &[AuthorNode]) {
    for child in children {
        visitor.visit_node(child);
    }
}

/// Node counts of an author tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub components: usize,
    pub texts: usize,
    pub placeholders: usize,
    pub fragments: usize,
    pub attributes: usize,
    pub id_overrides: usize,
    pub style_blocks: usize,
}

impl TreeStats {
    pub fn collect(root: &AuthorNode) -> Self {
        let mut stats = Self::default();
        stats.visit_node(root);
        stats
    }
}

impl Visitor for TreeStats {
    fn visit_component(&mut self, component: &ComponentNode) {
        self.components += 1;
        walk_component(self, component);
    }

    fn visit_fragment(&mut self, children: &[AuthorNode]) {
        self.fragments += 1;
        walk_fragment(self, children);
    }

    fn visit_text(&mut self, _value: &str, placeholder: bool) {
        if placeholder {
            self.placeholders += 1;
        } else {
            self.texts += 1;
        }
    }

    fn visit_attribute(&mut self, name: &str, _value: &RawValue) {
        match name {
            ID_ATTRIBUTE => self.id_overrides += 1,
            STYLE_ATTRIBUTE => self.style_blocks += 1,
            _ => self.attributes += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AuthorNode {
        AuthorNode::component("Body")
            .id("root")
            .style("color: red;")
            .attr("data-a", 1)
            .child(AuthorNode::fragment([
                AuthorNode::text("hello"),
                AuthorNode::from(AuthorNode::component("Box").attr("data-b", true)),
            ]))
            .child(AuthorNode::placeholder("sample"))
            .into()
    }

    #[test]
    fn test_tree_stats() {
        let stats = TreeStats::collect(&sample());
        assert_eq!(
            stats,
            TreeStats {
                components: 2,
                texts: 1,
                placeholders: 1,
                fragments: 1,
                attributes: 2,
                id_overrides: 1,
                style_blocks: 1,
            }
        );
    }

    #[test]
    fn test_default_walk_reaches_every_component() {
        struct Names(Vec<String>);

        impl Visitor for Names {
            fn visit_component(&mut self, component: &ComponentNode) {
                self.0.push(component.component.clone());
                walk_component(self, component);
            }
        }

        let mut names = Names(Vec::new());
        names.visit_node(&sample());
        assert_eq!(names.0, vec!["Body", "Box"]);
    }
}
