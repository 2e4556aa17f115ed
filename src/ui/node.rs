//! src/ui/node.rs
//!
//! Recursive layout Node + Panel trait used across the UI.
//!
//! Panels borrow dashboard state for a single frame and receive the theme
//! context on every draw instead of reading any global styling.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;

use super::theme::ThemeContext;

/// Panel trait: any renderable surface implements this.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, theme: &ThemeContext);
}

/// Node tree used to compose the UI each frame.
pub enum Node<'a> {
    Group {
        direction: Direction,
        constraints: Vec<Constraint>,
        children: Vec<Node<'a>>,
    },
    Leaf {
        panel: Box<dyn Panel + 'a>,
    },
}

impl Node<'_> {
    /// Draw the node into the given area.
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect, theme: &ThemeContext) {
        match self {
            Node::Group {
                direction,
                constraints,
                children,
            } => {
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(constraints.clone())
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk, theme);
                }
            }
            Node::Leaf { panel } => {
                panel.draw(f, area, theme);
            }
        }
    }

    /// Paint the themed background, then the tree on top of it.
    pub fn draw_root(&self, f: &mut Frame<'_>, theme: &ThemeContext) {
        let area = f.area();
        f.render_widget(Block::default().style(theme.base()), area);
        self.draw(f, area, theme);
    }
}

/// Helper: create a group node.
pub fn group<'a>(direction: Direction, constraints: Vec<Constraint>, children: Vec<Node<'a>>) -> Node<'a> {
    Node::Group {
        direction,
        constraints,
        children,
    }
}

/// Helper: create a leaf node.
pub fn leaf<'a>(panel: impl Panel + 'a) -> Node<'a> {
    Node::Leaf {
        panel: Box::new(panel),
    }
}
