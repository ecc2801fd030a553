//! List view rendering
//!
//! [`render`] turns a [`ListState`] into a small tree of [`Node`]s tagged
//! with accessibility roles. The tree can be queried by role or text, and
//! its `Display` impl prints it for the terminal.

use super::state::ListState;
use std::fmt::{self, Write as _};

/// Page heading
pub const TITLE: &str = "Stuff Manager";
/// Line under the page heading
pub const SUBTITLE: &str = "Manage your stuff items";
/// Section heading above the table
pub const SECTION_TITLE: &str = "Stuff List";
/// Accessible name of the loading indicator
pub const LOADING_LABEL: &str = "Loading...";
/// Fixed label of the error banner
pub const ERROR_LABEL: &str = "Error!";
/// Shown when a page has no items
pub const EMPTY_MESSAGE: &str = "No stuff items found.";
/// Table column headers, in order
pub const COLUMN_HEADERS: [&str; 3] = ["ID", "Name", "Description"];
/// Previous-page control
pub const PREVIOUS_LABEL: &str = "Previous";
/// Next-page control
pub const NEXT_LABEL: &str = "Next";

/// Accessibility role of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Container without semantics
    Group,
    /// Heading, with level 1 or 2
    Heading(u8),
    /// Plain text
    Text,
    /// Live region announcing progress
    Status,
    /// Live region announcing an error
    Alert,
    Table,
    Row,
    ColumnHeader,
    Cell,
    Button,
}

/// One element of the rendered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub role: Role,
    /// Text content of this node alone
    pub text: String,
    /// Accessible name, when it differs from the text
    pub label: Option<String>,
    pub disabled: bool,
    pub children: Vec<Node>,
}

impl Node {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            label: None,
            disabled: false,
            children: Vec::new(),
        }
    }

    fn group(role: Role, children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::new(role, "")
        }
    }

    fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Accessible name: the label if set, otherwise the text
    pub fn name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.text)
    }

    /// This node followed by all descendants, depth first
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }

    /// All nodes with a role
    pub fn all_by_role(&self, role: Role) -> Vec<&Node> {
        self.descendants()
            .into_iter()
            .filter(|n| n.role == role)
            .collect()
    }

    /// First node with a role
    pub fn find_by_role(&self, role: Role) -> Option<&Node> {
        self.descendants().into_iter().find(|n| n.role == role)
    }

    /// First node whose own text equals `text`
    pub fn find_by_text(&self, text: &str) -> Option<&Node> {
        self.descendants().into_iter().find(|n| n.text == text)
    }

    /// Whether any node's text contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.descendants()
            .into_iter()
            .any(|n| n.text.contains(needle))
    }

    /// Button by accessible name
    pub fn button(&self, name: &str) -> Option<&Node> {
        self.all_by_role(Role::Button)
            .into_iter()
            .find(|n| n.name() == name)
    }
}

/// Render the list view for a state
pub fn render(state: &ListState) -> Node {
    let body = if state.loading {
        Node::new(Role::Status, "").with_label(LOADING_LABEL)
    } else if let Some(ref message) = state.error {
        Node::group(
            Role::Alert,
            vec![Node::new(Role::Text, ERROR_LABEL), Node::new(Role::Text, message)],
        )
    } else if state.items.is_empty() {
        Node::new(Role::Text, EMPTY_MESSAGE)
    } else {
        render_table(state)
    };

    let controls = Node::group(
        Role::Group,
        vec![
            Node::new(Role::Button, PREVIOUS_LABEL).disabled(!state.previous_enabled()),
            Node::new(Role::Text, format!("Page {}", state.current_page)),
            Node::new(Role::Button, NEXT_LABEL).disabled(!state.next_enabled()),
        ],
    );

    Node::group(
        Role::Group,
        vec![
            Node::new(Role::Heading(1), TITLE),
            Node::new(Role::Text, SUBTITLE),
            Node::new(Role::Heading(2), SECTION_TITLE),
            body,
            controls,
        ],
    )
}

fn render_table(state: &ListState) -> Node {
    let header = Node::group(
        Role::Row,
        COLUMN_HEADERS
            .iter()
            .map(|h| Node::new(Role::ColumnHeader, *h))
            .collect(),
    );

    let mut rows = vec![header];
    rows.extend(state.items.iter().map(|item| {
        Node::group(
            Role::Row,
            vec![
                Node::new(Role::Cell, item.id.to_string()),
                Node::new(Role::Cell, item.name.clone()),
                Node::new(Role::Cell, item.description_text()),
            ],
        )
    }));

    Node::group(Role::Table, rows)
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_node(self, &mut out)?;
        f.write_str(out.trim_end())
    }
}

fn write_node(node: &Node, out: &mut String) -> fmt::Result {
    match node.role {
        Role::Group if node.children.iter().any(|c| c.role == Role::Button) => {
            let line: Vec<String> = node.children.iter().map(inline).collect();
            writeln!(out, "{}", line.join("  "))
        }
        Role::Group => node.children.iter().try_for_each(|c| write_node(c, out)),
        Role::Heading(1) => {
            writeln!(out, "{}", node.text)?;
            writeln!(out, "{}", "=".repeat(node.text.chars().count()))
        }
        Role::Heading(_) => {
            writeln!(out)?;
            writeln!(out, "{}", node.text)?;
            writeln!(out, "{}", "-".repeat(node.text.chars().count()))
        }
        Role::Status => writeln!(out, "{}", node.name()),
        Role::Alert => {
            let parts: Vec<&str> = node.children.iter().map(|c| c.text.as_str()).collect();
            writeln!(out, "{}", parts.join(" "))
        }
        Role::Table => write_table(node, out),
        _ => writeln!(out, "{}", inline(node)),
    }
}

fn inline(node: &Node) -> String {
    match node.role {
        Role::Button if node.disabled => format!("({})", node.text),
        Role::Button => format!("[{}]", node.text),
        _ => node.text.clone(),
    }
}

fn write_table(table: &Node, out: &mut String) -> fmt::Result {
    let rows: Vec<Vec<&str>> = table
        .children
        .iter()
        .map(|row| row.children.iter().map(|c| c.text.as_str()).collect())
        .collect();

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for (index, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        writeln!(out, "{}", cells.join(" | ").trim_end())?;
        if index == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            writeln!(out, "{}", rule.join("-+-"))?;
        }
    }
    Ok(())
}
