// crates/flexkit-native/src/lib.rs
//
// Native entry: flex components producing typed view-style objects for a
// mobile view container. Unlike the web variant there is no field-by-field
// merge with caller styles; the platform composes an array of style layers,
// later layers winning, so the node carries [cached base, caller style].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Serialize, Serializer};

pub use flexkit_core::{
    style_key, ElementId, FlexAlign, FlexDirection, FlexError, FlexJustify, NodeRef, StyleCache,
    DEFAULT_CACHE_CAPACITY,
};

// =============================================================================
// Style values
// =============================================================================

/// View display mode. Flex is the only mode these components emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Flex,
}

/// Platform keyword form of [`FlexAlign`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
    Baseline,
}

impl From<FlexAlign> for AlignItems {
    fn from(align: FlexAlign) -> Self {
        match align {
            FlexAlign::Start => AlignItems::FlexStart,
            FlexAlign::Center => AlignItems::Center,
            FlexAlign::End => AlignItems::FlexEnd,
            FlexAlign::Stretch => AlignItems::Stretch,
            FlexAlign::Baseline => AlignItems::Baseline,
        }
    }
}

/// Platform keyword form of [`FlexJustify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl From<FlexJustify> for JustifyContent {
    fn from(justify: FlexJustify) -> Self {
        match justify {
            FlexJustify::Start => JustifyContent::FlexStart,
            FlexJustify::Center => JustifyContent::Center,
            FlexJustify::End => JustifyContent::FlexEnd,
            FlexJustify::Between => JustifyContent::SpaceBetween,
            FlexJustify::Around => JustifyContent::SpaceAround,
            FlexJustify::Evenly => JustifyContent::SpaceEvenly,
        }
    }
}

/// A view dimension: absolute points or a percentage of the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeValue {
    Points(f32),
    Percent(f32),
}

impl SizeValue {
    pub const FULL: SizeValue = SizeValue::Percent(100.0);
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeValue::Points(n) => write!(f, "{n}"),
            SizeValue::Percent(p) => write!(f, "{p}%"),
        }
    }
}

impl Serialize for SizeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SizeValue::Points(n) => serializer.serialize_f32(*n),
            SizeValue::Percent(p) => serializer.collect_str(&format_args!("{p}%")),
        }
    }
}

/// Typed view-style bag. Unset fields are omitted, not zeroed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<SizeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<SizeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
}

impl ViewStyle {
    /// Overlay `layer` onto `self`; set fields in `layer` win.
    fn apply(&mut self, layer: &ViewStyle) {
        macro_rules! take {
            ($field:ident) => {
                if layer.$field.is_some() {
                    self.$field = layer.$field;
                }
            };
        }
        take!(display);
        take!(flex_direction);
        take!(align_items);
        take!(justify_content);
        take!(gap);
        take!(width);
        take!(height);
        take!(padding);
        take!(margin);
    }
}

fn base_view_style(
    direction: FlexDirection,
    full_width: bool,
    full_height: bool,
    align: FlexAlign,
    justify: FlexJustify,
    gap: f32,
) -> ViewStyle {
    ViewStyle {
        display: Some(DisplayMode::Flex),
        flex_direction: Some(direction),
        align_items: Some(align.into()),
        justify_content: Some(justify.into()),
        gap: Some(gap),
        width: full_width.then_some(SizeValue::FULL),
        height: full_height.then_some(SizeValue::FULL),
        ..ViewStyle::default()
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Native gap calculator: spacing scale index -> density-independent pixels.
pub type GapCalculator = Rc<dyn Fn(f32) -> f32>;

/// Default native gap calculator: `space * 4` dp.
pub fn default_gap_calculator(space: f32) -> f32 {
    space * 4.0
}

pub struct NativeFlexConfig {
    pub gap_calculator: GapCalculator,
    pub default_space: f32,
    pub default_align: FlexAlign,
    pub default_justify: FlexJustify,
}

impl Default for NativeFlexConfig {
    fn default() -> Self {
        Self {
            gap_calculator: Rc::new(default_gap_calculator),
            default_space: 2.0,
            default_align: FlexAlign::default(),
            default_justify: FlexJustify::default(),
        }
    }
}

impl fmt::Debug for NativeFlexConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFlexConfig")
            .field("gap_calculator", &"<fn>")
            .field("default_space", &self.default_space)
            .field("default_align", &self.default_align)
            .field("default_justify", &self.default_justify)
            .finish()
    }
}

// =============================================================================
// Nodes and props
// =============================================================================

/// The underlying platform primitive: a generic view container.
///
/// `styles` is the layered style list the platform composes natively:
/// `styles[0]` is the cached base descriptor, a caller-supplied style
/// follows it. Later layers win when the platform flattens.
#[derive(Debug, Clone, Default)]
pub struct ViewNode {
    pub styles: Vec<Rc<ViewStyle>>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<ViewNode>,
    pub node_ref: Option<NodeRef>,
}

impl ViewNode {
    pub fn base_style(&self) -> Option<&Rc<ViewStyle>> {
        self.styles.first()
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Flatten the style layers the way the platform does: in order, later
    /// layers overriding earlier ones field by field.
    pub fn flattened_style(&self) -> ViewStyle {
        let mut flat = ViewStyle::default();
        for layer in &self.styles {
            flat.apply(layer);
        }
        flat
    }
}

/// Props shared by `Row` and `Col` on the native target.
#[derive(Debug, Default)]
pub struct NativeFlexLayoutProps {
    pub children: Vec<ViewNode>,
    pub reverse: bool,
    pub full_width: bool,
    pub full_height: bool,
    pub align: Option<FlexAlign>,
    pub justify: Option<FlexJustify>,
    /// Spacing scale index; no string form on native.
    pub space: Option<f32>,
    /// Additional style layer appended after the resolved base style.
    pub style: Option<ViewStyle>,
    pub attrs: Vec<(String, String)>,
    pub node_ref: Option<NodeRef>,
}

/// Props for the generic native `Flex` component.
#[derive(Debug, Default)]
pub struct NativeFlexProps {
    pub children: Vec<ViewNode>,
    pub direction: Option<FlexDirection>,
    pub full_width: bool,
    pub full_height: bool,
    pub align: Option<FlexAlign>,
    pub justify: Option<FlexJustify>,
    pub space: Option<f32>,
    pub style: Option<ViewStyle>,
    pub attrs: Vec<(String, String)>,
    pub node_ref: Option<NodeRef>,
}

// =============================================================================
// Components
// =============================================================================

struct Shared {
    cache: RefCell<StyleCache<ViewStyle>>,
    config: NativeFlexConfig,
}

impl Shared {
    fn render_container(&self, direction: FlexDirection, props: NativeFlexLayoutProps) -> ViewNode {
        let align = props.align.unwrap_or(self.config.default_align);
        let justify = props.justify.unwrap_or(self.config.default_justify);
        let space = props.space.unwrap_or(self.config.default_space);

        let key = style_key(
            direction,
            props.full_width,
            props.full_height,
            align,
            justify,
            space,
        );
        let base = self.cache.borrow_mut().resolve(key, || {
            let gap = (self.config.gap_calculator)(space);
            base_view_style(
                direction,
                props.full_width,
                props.full_height,
                align,
                justify,
                gap,
            )
        });

        let mut styles = vec![base];
        if let Some(user) = props.style {
            styles.push(Rc::new(user));
        }

        ViewNode {
            styles,
            attrs: props.attrs,
            children: props.children,
            node_ref: props.node_ref,
        }
    }
}

/// Horizontal view container. `reverse` flips to row-reverse.
#[derive(Clone)]
pub struct Row {
    shared: Rc<Shared>,
}

impl Row {
    pub fn render(&self, props: NativeFlexLayoutProps) -> ViewNode {
        let direction = if props.reverse {
            FlexDirection::RowReverse
        } else {
            FlexDirection::Row
        };
        self.shared.render_container(direction, props)
    }
}

/// Vertical view container. `reverse` flips to column-reverse.
#[derive(Clone)]
pub struct Col {
    shared: Rc<Shared>,
}

impl Col {
    pub fn render(&self, props: NativeFlexLayoutProps) -> ViewNode {
        let direction = if props.reverse {
            FlexDirection::ColumnReverse
        } else {
            FlexDirection::Column
        };
        self.shared.render_container(direction, props)
    }
}

/// Generic view container with an explicit direction prop (default row).
#[derive(Clone)]
pub struct Flex {
    shared: Rc<Shared>,
}

impl Flex {
    pub fn render(&self, props: NativeFlexProps) -> ViewNode {
        let direction = props.direction.unwrap_or_default();
        self.shared.render_container(
            direction,
            NativeFlexLayoutProps {
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
pub fn create_flex_components(config: NativeFlexConfig) -> FlexComponents {
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
    static DEFAULT_COMPONENTS: FlexComponents =
        create_flex_components(NativeFlexConfig::default());
}

/// Render a `Row` with the default configuration.
pub fn row(props: NativeFlexLayoutProps) -> ViewNode {
    DEFAULT_COMPONENTS.with(|c| c.row.render(props))
}

/// Render a `Col` with the default configuration.
pub fn col(props: NativeFlexLayoutProps) -> ViewNode {
    DEFAULT_COMPONENTS.with(|c| c.col.render(props))
}

/// Render a `Flex` with the default configuration.
pub fn flex(props: NativeFlexProps) -> ViewNode {
    DEFAULT_COMPONENTS.with(|c| c.flex.render(props))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components() -> FlexComponents {
        create_flex_components(NativeFlexConfig::default())
    }

    #[test]
    fn row_defaults() {
        let node = components().row.render(NativeFlexLayoutProps::default());
        let style = node.base_style().unwrap();
        assert_eq!(style.display, Some(DisplayMode::Flex));
        assert_eq!(style.flex_direction, Some(FlexDirection::Row));
        assert_eq!(style.align_items, Some(AlignItems::Center));
        assert_eq!(style.justify_content, Some(JustifyContent::FlexStart));
        assert_eq!(style.gap, Some(8.0));
        assert_eq!(style.width, None);
        assert_eq!(style.height, None);
    }

    #[test]
    fn col_and_flex_default_directions() {
        let set = components();
        let col = set.col.render(NativeFlexLayoutProps::default());
        assert_eq!(
            col.base_style().unwrap().flex_direction,
            Some(FlexDirection::Column)
        );

        let flex = set.flex.render(NativeFlexProps::default());
        assert_eq!(
            flex.base_style().unwrap().flex_direction,
            Some(FlexDirection::Row)
        );
    }

    #[test]
    fn reverse_flag_flips_direction() {
        let set = components();
        let row = set.row.render(NativeFlexLayoutProps {
            reverse: true,
            ..Default::default()
        });
        assert_eq!(
            row.base_style().unwrap().flex_direction,
            Some(FlexDirection::RowReverse)
        );

        let col = set.col.render(NativeFlexLayoutProps {
            reverse: true,
            ..Default::default()
        });
        assert_eq!(
            col.base_style().unwrap().flex_direction,
            Some(FlexDirection::ColumnReverse)
        );
    }

    #[test]
    fn space_runs_through_dp_calculator() {
        let node = components().row.render(NativeFlexLayoutProps {
            space: Some(3.0),
            ..Default::default()
        });
        assert_eq!(node.base_style().unwrap().gap, Some(12.0));
    }

    #[test]
    fn full_size_flags_set_percent_dimensions() {
        let node = components().row.render(NativeFlexLayoutProps {
            full_width: true,
            full_height: true,
            ..Default::default()
        });
        let style = node.base_style().unwrap();
        assert_eq!(style.width, Some(SizeValue::Percent(100.0)));
        assert_eq!(style.height, Some(SizeValue::Percent(100.0)));
    }

    #[test]
    fn identical_props_reuse_the_cached_descriptor() {
        let set = components();
        let a = set.col.render(NativeFlexLayoutProps::default());
        let b = set.col.render(NativeFlexLayoutProps {
            attrs: vec![("testID".to_string(), "panel".to_string())],
            ..Default::default()
        });
        assert!(Rc::ptr_eq(a.base_style().unwrap(), b.base_style().unwrap()));
        assert_eq!(b.attr("testID"), Some("panel"));
    }

    #[test]
    fn caller_style_is_a_second_layer_not_a_merge() {
        let node = components().row.render(NativeFlexLayoutProps {
            style: Some(ViewStyle {
                gap: Some(99.0),
                padding: Some(16.0),
                ..ViewStyle::default()
            }),
            ..Default::default()
        });
        assert_eq!(node.styles.len(), 2);
        // Base layer is untouched; the platform flattens with later layers
        // winning, so the caller's gap overrides on native.
        assert_eq!(node.styles[0].gap, Some(8.0));
        assert_eq!(node.styles[1].gap, Some(99.0));

        let flat = node.flattened_style();
        assert_eq!(flat.gap, Some(99.0));
        assert_eq!(flat.padding, Some(16.0));
        assert_eq!(flat.flex_direction, Some(FlexDirection::Row));
    }

    #[test]
    fn eviction_past_capacity_recomputes_earliest_key() {
        let set = components();
        let first = set.row.render(NativeFlexLayoutProps {
            space: Some(0.0),
            ..Default::default()
        });
        for space in 1..=(DEFAULT_CACHE_CAPACITY as i32) {
            set.row.render(NativeFlexLayoutProps {
                space: Some(space as f32),
                ..Default::default()
            });
        }
        let again = set.row.render(NativeFlexLayoutProps {
            space: Some(0.0),
            ..Default::default()
        });
        assert!(!Rc::ptr_eq(
            first.base_style().unwrap(),
            again.base_style().unwrap()
        ));
    }

    #[test]
    fn factories_are_independent() {
        let a = create_flex_components(NativeFlexConfig {
            gap_calculator: Rc::new(|space| space * 10.0),
            default_space: 1.0,
            ..Default::default()
        });
        let b = create_flex_components(NativeFlexConfig::default());

        let from_a = a.row.render(NativeFlexLayoutProps::default());
        let from_b = b.row.render(NativeFlexLayoutProps::default());
        assert_eq!(from_a.base_style().unwrap().gap, Some(10.0));
        assert_eq!(from_b.base_style().unwrap().gap, Some(8.0));
    }

    #[test]
    fn forwards_children_attrs_and_ref() {
        let node_ref = NodeRef::new();
        let node = components().flex.render(NativeFlexProps {
            direction: Some(FlexDirection::ColumnReverse),
            children: vec![ViewNode::default()],
            attrs: vec![("accessibilityLabel".to_string(), "list".to_string())],
            node_ref: Some(node_ref.clone()),
            ..Default::default()
        });
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.attr("accessibilityLabel"), Some("list"));
        assert!(node.node_ref.as_ref().unwrap().same_slot(&node_ref));
    }

    #[test]
    fn view_style_serializes_with_platform_field_names() {
        let style = base_view_style(
            FlexDirection::RowReverse,
            true,
            false,
            FlexAlign::Baseline,
            FlexJustify::Between,
            8.0,
        );
        let value = serde_json::to_value(style).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "display": "flex",
                "flexDirection": "row-reverse",
                "alignItems": "baseline",
                "justifyContent": "space-between",
                "gap": 8.0,
                "width": "100%",
            })
        );
    }

    #[test]
    fn module_level_components_share_default_configuration() {
        let a = row(NativeFlexLayoutProps::default());
        assert_eq!(a.base_style().unwrap().gap, Some(8.0));

        let b = col(NativeFlexLayoutProps::default());
        assert_eq!(
            b.base_style().unwrap().flex_direction,
            Some(FlexDirection::Column)
        );

        let c = flex(NativeFlexProps::default());
        assert_eq!(
            c.base_style().unwrap().flex_direction,
            Some(FlexDirection::Row)
        );
    }
}
