//! Page - The portfolio page model and its flexbox layout
//!
//! A page is a list of sections, each a heading followed by rows of
//! elements. `Page::layout` runs the tree through Taffy and flattens it into
//! absolute rectangles in paint order (containers before their children),
//! which is also hit-test order: a button drawn over its section wins.
//!
//! Every container is itself an element (`Section`, `Div`, `Form`), so
//! hit-testing anywhere on the page reports *something*; only points past
//! the end of the page miss.

use taffy::{
    AvailableSpace, Dimension as TaffyDimension, Display, FlexDirection, FlexWrap,
    LengthPercentage, NodeId, Rect as TaffyRect, Size, Style, TaffyTree,
};

use crate::error::Result;
use crate::renderer::Canvas;
use crate::state::scene::Scene;
use crate::types::{Element, ElementTag, Rect, Rgba, Role, Viewport};

/// Width of form fields, in cells.
const FIELD_WIDTH: f32 = 32.0;
/// Height of the message text area, in rows.
const TEXT_AREA_ROWS: f32 = 3.0;

// =============================================================================
// Model
// =============================================================================

/// A horizontal run of elements. Wraps when it runs out of width.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub elements: Vec<Element>,
}

impl Row {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn single(element: Element) -> Self {
        Self::new(vec![element])
    }
}

/// A titled block of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// Container kind: `Section`, or `Form` for the contact form.
    pub tag: ElementTag,
    pub heading: Option<String>,
    pub rows: Vec<Row>,
}

impl Section {
    pub fn new(id: impl Into<String>, heading: Option<&str>, rows: Vec<Row>) -> Self {
        Self {
            id: id.into(),
            tag: ElementTag::Section,
            heading: heading.map(str::to_string),
            rows,
        }
    }

    fn element(&self) -> Element {
        let role = if self.id == "nav" { Role::Navigation } else { Role::Region };
        Element::new(self.tag, "").role(role).id(self.id.clone())
    }
}

/// A single-page portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub sections: Vec<Section>,
}

fn link(label: &str) -> Element {
    Element::new(ElementTag::Anchor, label)
}

fn text(label: &str) -> Element {
    Element::new(ElementTag::Paragraph, label)
}

fn tag(label: &str) -> Element {
    Element::new(ElementTag::Span, label)
}

impl Page {
    /// The portfolio: navigation, hero, about, education, projects, skills,
    /// contact form and footer.
    pub fn portfolio() -> Self {
        let projects = [
            "RAG Question-Answering for Traffic Regulations",
            "Failure Analysis of Composite Materials",
            "Regression Analysis of Soil Carbon Sequestration",
            "Twitter Influencer Detection",
        ];

        let mut project_rows = Vec::new();
        for title in projects {
            project_rows.push(Row::new(vec![
                Element::new(ElementTag::Heading, title),
                link("Code"),
            ]));
        }

        let mut contact = Section::new(
            "contact",
            Some("Get In Touch"),
            vec![
                Row::new(vec![
                    Element::new(ElementTag::Input, "Name").id("name"),
                    Element::new(ElementTag::Input, "Email").id("email"),
                ]),
                Row::single(Element::new(ElementTag::Input, "Subject").id("subject")),
                Row::single(Element::new(ElementTag::TextArea, "Message").id("message")),
                Row::single(Element::new(ElementTag::Button, "Send Message")),
            ],
        );
        contact.tag = ElementTag::Form;

        Self {
            sections: vec![
                Section::new(
                    "nav",
                    None,
                    vec![Row::new(vec![
                        link("Home"),
                        link("About"),
                        link("Projects"),
                        link("Skills"),
                        link("Contact"),
                    ])],
                ),
                Section::new(
                    "home",
                    Some("Hi, I build things with data"),
                    vec![
                        Row::single(text("Data scientist turning messy datasets into working models.")),
                        Row::new(vec![
                            Element::new(ElementTag::Button, "View Projects"),
                            link("Download CV"),
                        ]),
                    ],
                ),
                Section::new(
                    "about",
                    Some("About Me"),
                    vec![
                        Row::single(text("I work across NLP, graph analytics and classical ML.")),
                        Row::single(Element::new(ElementTag::Image, "[portrait]").role(Role::Img)),
                    ],
                ),
                Section::new(
                    "education",
                    Some("Education"),
                    vec![Row::single(text("Bachelor's Degree in Data Science"))],
                ),
                Section::new("projects", Some("Projects"), project_rows),
                Section::new(
                    "skills",
                    Some("Skills & Technologies"),
                    vec![
                        Row::new(
                            ["Python", "TensorFlow", "PyTorch", "Pandas", "SQL", "React", "Flutter"]
                                .into_iter()
                                .map(tag)
                                .collect(),
                        ),
                        Row::single(
                            Element::new(ElementTag::Div, "Show skills graph").role(Role::Button),
                        ),
                    ],
                ),
                contact,
                Section::new(
                    "footer",
                    None,
                    vec![Row::new(vec![link("GitHub"), link("LinkedIn"), link("Email")])],
                ),
            ],
        }
    }

    /// Lay the page out for a viewport width.
    pub fn layout(&self, viewport: Viewport) -> Result<PageLayout> {
        let mut builder = LayoutBuilder::new();

        let root = builder.push(
            Element::new(ElementTag::Div, "").id("page"),
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: Size {
                    width: TaffyDimension::Length(viewport.width as f32),
                    height: TaffyDimension::Auto,
                },
                padding: TaffyRect {
                    left: LengthPercentage::Length(2.0),
                    right: LengthPercentage::Length(2.0),
                    top: LengthPercentage::Length(1.0),
                    bottom: LengthPercentage::Length(1.0),
                },
                gap: Size {
                    width: LengthPercentage::Length(0.0),
                    height: LengthPercentage::Length(1.0),
                },
                ..Default::default()
            },
            None,
        )?;

        for section in &self.sections {
            builder.push_section(section, root)?;
        }

        builder.compute(root, viewport)
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Absolute rectangles for every element, in paint order.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub viewport: Viewport,
    pub items: Vec<(Element, Rect)>,
}

impl PageLayout {
    /// Build the hit-testing scene.
    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new(self.viewport);
        for (element, rect) in &self.items {
            scene.add(element.clone(), *rect);
        }
        scene
    }

    /// Find an element by id.
    pub fn find(&self, id: &str) -> Option<&(Element, Rect)> {
        self.items
            .iter()
            .find(|(element, _)| element.id.as_deref() == Some(id))
    }

    /// Paint element text into the canvas.
    pub fn paint(&self, canvas: &mut Canvas) {
        canvas.clear();
        for (element, rect) in &self.items {
            let label = element.label.as_str();
            match element.tag {
                ElementTag::Heading => {
                    canvas.put_str(rect.x, rect.y, label, Rgba::WHITE);
                }
                ElementTag::Paragraph | ElementTag::Image => {
                    canvas.put_str(rect.x, rect.y, label, Rgba::GRAY);
                }
                ElementTag::Anchor => {
                    canvas.put_str(rect.x, rect.y, label, Rgba::INDIGO);
                }
                ElementTag::Span => {
                    canvas.put_str(rect.x, rect.y, &format!("#{label}"), Rgba::GRAY);
                }
                ElementTag::Button => {
                    canvas.put_str(rect.x, rect.y, &format!("[ {label} ]"), Rgba::WHITE);
                }
                ElementTag::Input | ElementTag::TextArea | ElementTag::Select => {
                    let width = rect.width as usize;
                    for row in 0..rect.height {
                        let line = if row == 0 {
                            let prompt: String =
                                format!("{label}: ").chars().take(width).collect();
                            format!("{prompt:_<width$}")
                        } else {
                            "_".repeat(width)
                        };
                        canvas.put_str(rect.x, rect.y + row, &line, Rgba::GRAY);
                    }
                }
                ElementTag::Div if element.role == Some(Role::Button) => {
                    canvas.put_str(rect.x, rect.y, &format!("< {label} >"), Rgba::INDIGO);
                }
                ElementTag::Div | ElementTag::Section | ElementTag::Form => {}
            }
        }
    }
}

/// Cell footprint of an element's painted form.
fn leaf_size(element: &Element) -> (TaffyDimension, f32) {
    let label = element.label.chars().count() as f32;
    match element.tag {
        ElementTag::Paragraph => (TaffyDimension::Percent(1.0), 1.0),
        ElementTag::Input | ElementTag::Select => (TaffyDimension::Length(FIELD_WIDTH), 1.0),
        ElementTag::TextArea => (TaffyDimension::Length(FIELD_WIDTH * 2.0 + 2.0), TEXT_AREA_ROWS),
        ElementTag::Button => (TaffyDimension::Length(label + 4.0), 1.0),
        ElementTag::Span => (TaffyDimension::Length(label + 1.0), 1.0),
        ElementTag::Div if element.role == Some(Role::Button) => {
            (TaffyDimension::Length(label + 4.0), 1.0)
        }
        _ => (TaffyDimension::Length(label), 1.0),
    }
}

struct LayoutBuilder {
    tree: TaffyTree<()>,
    /// (node, element, parent entry)
    entries: Vec<(NodeId, Element, Option<usize>)>,
}

impl LayoutBuilder {
    fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
            entries: Vec::new(),
        }
    }

    /// Create a node and attach it under `parent`. Returns its entry index.
    fn push(&mut self, element: Element, style: Style, parent: Option<usize>) -> Result<usize> {
        let node = self.tree.new_leaf(style)?;
        if let Some(parent) = parent {
            let parent_node = self.entries[parent].0;
            self.tree.add_child(parent_node, node)?;
        }
        self.entries.push((node, element, parent));
        Ok(self.entries.len() - 1)
    }

    fn push_section(&mut self, section: &Section, root: usize) -> Result<()> {
        let column = Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: Size {
                width: TaffyDimension::Percent(1.0),
                height: TaffyDimension::Auto,
            },
            ..Default::default()
        };
        let section_entry = self.push(section.element(), column, Some(root))?;

        if let Some(heading) = &section.heading {
            let element = Element::new(ElementTag::Heading, heading.as_str());
            let style = leaf_style(&element);
            self.push(element, style, Some(section_entry))?;
        }

        for row in &section.rows {
            let row_style = Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                flex_wrap: FlexWrap::Wrap,
                size: Size {
                    width: TaffyDimension::Percent(1.0),
                    height: TaffyDimension::Auto,
                },
                gap: Size {
                    width: LengthPercentage::Length(2.0),
                    height: LengthPercentage::Length(0.0),
                },
                ..Default::default()
            };
            let row_entry = self.push(Element::new(ElementTag::Div, ""), row_style, Some(section_entry))?;

            for element in &row.elements {
                let style = leaf_style(element);
                self.push(element.clone(), style, Some(row_entry))?;
            }
        }

        Ok(())
    }

    fn compute(mut self, root: usize, viewport: Viewport) -> Result<PageLayout> {
        let root_node = self.entries[root].0;
        self.tree.compute_layout(
            root_node,
            Size {
                width: AvailableSpace::Definite(viewport.width as f32),
                height: AvailableSpace::MaxContent,
            },
        )?;

        // Parents precede children, so absolute origins resolve in one pass
        let mut origins: Vec<(f32, f32)> = Vec::with_capacity(self.entries.len());
        let mut items = Vec::with_capacity(self.entries.len());

        for (node, element, parent) in self.entries {
            let layout = self.tree.layout(node)?;
            let (px, py) = parent.map(|p| origins[p]).unwrap_or((0.0, 0.0));
            let x = px + layout.location.x;
            let y = py + layout.location.y;
            origins.push((x, y));

            let rect = Rect::new(
                to_cells(x),
                to_cells(y),
                to_cells(layout.size.width),
                to_cells(layout.size.height),
            );
            items.push((element, rect));
        }

        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            elements = items.len(),
            "page laid out"
        );

        Ok(PageLayout { viewport, items })
    }
}

fn leaf_style(element: &Element) -> Style {
    let (width, height) = leaf_size(element);
    Style {
        size: Size {
            width,
            height: TaffyDimension::Length(height),
        },
        flex_shrink: 0.0,
        ..Default::default()
    }
}

fn to_cells(value: f32) -> u16 {
    value.round().clamp(0.0, u16::MAX as f32) as u16
}

// =============================================================================
// TESTS
// =============================================================================
