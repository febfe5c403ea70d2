// crates/flexkit-web/src/components.rs
//
// Row / Col / Flex for the DOM target. A factory call allocates one shared
// style cache plus the captured defaults; the three returned component
// handles are stateless render functions over that shared allocation.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use flexkit_core::{style_key, FlexAlign, FlexDirection, FlexJustify, NodeRef, StyleCache};

use crate::style::{base_style, CssStyle, Space};

/// Web gap calculator: spacing scale index -> CSS length string.
pub type GapCalculator = Rc<dyn Fn(f32) -> String>;

/// Default web gap calculator: Tailwind scale, `space * 0.25` rem.
pub fn default_gap_calculator(space: f32) -> String {
    format!("{}rem", space * 0.25)
}

/// Configuration captured at factory-creation time. Applies to all three
/// components produced by that call.
pub struct WebFlexConfig {
    pub gap_calculator: GapCalculator,
    pub default_space: f32,
    pub default_align: FlexAlign,
    pub default_justify: FlexJustify,
}

impl Default for WebFlexConfig {
    fn default() -> Self {
        Self {
            gap_calculator: Rc::new(default_gap_calculator),
            default_space: 2.0,
            default_align: FlexAlign::default(),
            default_justify: FlexJustify::default(),
        }
    }
}

impl fmt::Debug for WebFlexConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebFlexConfig")
            .field("gap_calculator", &"<fn>")
            .field("default_space", &self.default_space)
            .field("default_align", &self.default_align)
            .field("default_justify", &self.default_justify)
            .finish()
    }
}

/// The underlying platform primitive: a generic DOM container node.
///
/// Everything the component does not recognize (`attrs`, `node_ref`,
/// `children`) is carried verbatim for the host renderer.
#[derive(Debug, Clone, Default)]
pub struct DomNode {
    pub tag: &'static str,
    pub style: Rc<CssStyle>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<DomNode>,
    pub node_ref: Option<NodeRef>,
    pub text: Option<String>,
}

impl DomNode {
    /// Leaf text node, for building children in tests and demos.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: "span",
            text: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Props shared by `Row` and `Col`.
///
/// `align`, `justify`, and `space` fall back to the factory defaults when
/// unset; `attrs` is the open pass-through bag for platform attributes.
#[derive(Debug, Default)]
pub struct FlexLayoutProps {
    pub children: Vec<DomNode>,
    pub reverse: bool,
    pub full_width: bool,
    pub full_height: bool,
    pub align: Option<FlexAlign>,
    pub justify: Option<FlexJustify>,
    pub space: Option<Space>,
    /// Inline style override. Resolved layout fields win on conflict.
    pub style: Option<CssStyle>,
    pub attrs: Vec<(String, String)>,
    pub node_ref: Option<NodeRef>,
}

/// Props for the generic `Flex` component, the only one exposing all four
/// directions.
#[derive(Debug, Default)]
pub struct FlexProps {
    pub children: Vec<DomNode>,
    pub direction: Option<FlexDirection>,
    pub full_width: bool,
    pub full_height: bool,
    pub align: Option<FlexAlign>,
    pub justify: Option<FlexJustify>,
    pub space: Option<Space>,
    pub style: Option<CssStyle>,
    pub attrs: Vec<(String, String)>,
    pub node_ref: Option<NodeRef>,
}

struct Shared {
    cache: RefCell<StyleCache<CssStyle>>,
    config: WebFlexConfig,
}

impl Shared {
    fn resolve_style(
        &self,
        direction: FlexDirection,
        full_width: bool,
        full_height: bool,
        align: FlexAlign,
        justify: FlexJustify,
        space: &Space,
        user_style: Option<&CssStyle>,
    ) -> Rc<CssStyle> {
        let key = style_key(direction, full_width, full_height, align, justify, space);
        let base = self.cache.borrow_mut().resolve(key, || {
            let gap = match space {
                Space::Scale(n) => (self.config.gap_calculator)(*n),
                Space::Css(literal) => literal.clone(),
            };
            base_style(direction, full_width, full_height, align, justify, gap)
        });
        match user_style {
            Some(user) => Rc::new(base.merged_over(user)),
            None => base,
        }
    }

    fn render_container(&self, direction: FlexDirection, props: FlexLayoutProps) -> DomNode {
        let align = props.align.unwrap_or(self.config.default_align);
        let justify = props.justify.unwrap_or(self.config.default_justify);
        let space = props
            .space
            .unwrap_or(Space::Scale(self.config.default_space));

        let style = self.resolve_style(
            direction,
            props.full_width,
            props.full_height,
            align,
            justify,
            &space,
            props.style.as_ref(),
        );

        DomNode {
            tag: "div",
            style,
            attrs: props.attrs,
            children: props.children,
            node_ref: props.node_ref,
            text: None,
        }
    }
}

/// Horizontal flex container. `reverse` flips to row-reverse.
#[derive(Clone)]
pub struct Row {
    shared: Rc<Shared>,
}

impl Row {
    pub fn render(&self, props: FlexLayoutProps) -> DomNode {
        let direction = if props.reverse {
            FlexDirection::RowReverse
        } else {
            FlexDirection::Row
        };
        self.shared.render_container(direction, props)
    }
}

/// Vertical flex container. `reverse` flips to column-reverse.
#[derive(Clone)]
pub struct Col {
    shared: Rc<Shared>,
}

impl Col {
    pub fn render(&self, props: FlexLayoutProps) -> DomNode {
        let direction = if props.reverse {
            FlexDirection::ColumnReverse
        } else {
            FlexDirection::Column
        };
        self.shared.render_container(direction, props)
    }
}

/// Generic flex container with an explicit direction prop (default row).
#[derive(Clone)]
pub struct Flex {
    shared: Rc<Shared>,
}

impl Flex {
    pub fn render(&self, props: FlexProps) -> DomNode {
        let direction = props.direction.unwrap_or_default();
        self.shared.render_container(
            direction,
            FlexLayoutProps {
                children: props.children,
                reverse: false,
                full_width: props.full_width,
                full_height: props.full_height,
                align: props.align,
                justify: props.justify,
                space: props.space,
                style: props.style,
                attrs: props.attrs,
                node_ref: props.node_ref,
            },
        )
    }
}

/// The component set produced by one factory call.
pub struct FlexComponents {
    pub row: Row,
    pub col: Col,
    pub flex: Flex,
}

/// Build `Row`, `Col`, and `Flex` sharing one style cache and one set of
/// defaults. Calling this twice yields two fully independent sets.
pub fn create_flex_components(config: WebFlexConfig) -> FlexComponents {
    let shared = Rc::new(Shared {
        cache: RefCell::new(StyleCache::with_default_capacity()),
        config,
    });
    FlexComponents {
        row: Row {
            shared: Rc::clone(&shared),
        },
        col: Col {
            shared: Rc::clone(&shared),
        },
        flex: Flex { shared },
    }
}

thread_local! {
    /// Default component set backing the module-level render functions.
    /// Lazily initialized, lives for the thread (no teardown).
    static DEFAULT_COMPONENTS: FlexComponents =
        create_flex_components(WebFlexConfig::default());
}

/// Render a `Row` with the default configuration.
pub fn row(props: FlexLayoutProps) -> DomNode {
    DEFAULT_COMPONENTS.with(|c| c.row.render(props))
}

/// Render a `Col` with the default configuration.
pub fn col(props: FlexLayoutProps) -> DomNode {
    DEFAULT_COMPONENTS.with(|c| c.col.render(props))
}

/// Render a `Flex` with the default configuration.
pub fn flex(props: FlexProps) -> DomNode {
    DEFAULT_COMPONENTS.with(|c| c.flex.render(props))
}
