use crate::core::Slug;
use crate::widgets::mount::WidgetMount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoTone {
    Note,
    Warning,
}

/// One node of the emitted tree; node order is the on-screen field order.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Widget(WidgetMount),
    /// Collapse state is presentational only.
    Group {
        name: String,
        collapsed: bool,
        children: Vec<Node>,
    },
    Info {
        text: String,
        tone: InfoTone,
    },
    /// Asks the external map view to colour by `scale`.
    MapSwitcher {
        scale: Slug,
        active: bool,
    },
}

impl Node {
    pub fn widget(mount: WidgetMount) -> Self {
        Node::Widget(mount)
    }

    pub fn group(name: impl Into<String>, collapsed: bool, children: Vec<Node>) -> Self {
        Node::Group {
            name: name.into(),
            collapsed,
            children,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Node::Info {
            text: text.into(),
            tone: InfoTone::Note,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Node::Info {
            text: text.into(),
            tone: InfoTone::Warning,
        }
    }

    pub fn map_switcher(scale: impl Into<Slug>, active: bool) -> Self {
        Node::MapSwitcher {
            scale: scale.into(),
            active,
        }
    }

    pub fn as_widget(&self) -> Option<&WidgetMount> {
        match self {
            Node::Widget(mount) => Some(mount),
            _ => None,
        }
    }
}

pub fn find_widget<'a>(nodes: &'a [Node], slug: &str) -> Option<&'a WidgetMount> {
    for node in nodes {
        match node {
            Node::Widget(mount) => {
                if mount.slug == slug {
                    return Some(mount);
                }
            }
            Node::Group { children, .. } => {
                if let Some(found) = find_widget(children, slug) {
                    return Some(found);
                }
            }
            _ => {}
        }
    }
    None
}

/// Slugs of every mounted widget, in tree order.
pub fn widget_slugs(nodes: &[Node]) -> Vec<Slug> {
    let mut slugs = Vec::new();
    collect_slugs(nodes, &mut slugs);
    slugs
}

fn collect_slugs(nodes: &[Node], out: &mut Vec<Slug>) {
    for node in nodes {
        match node {
            Node::Widget(mount) => out.push(mount.slug.clone()),
            Node::Group { children, .. } => collect_slugs(children, out),
            _ => {}
        }
    }
}
