//! Enum-valued props mapped to CSS class tokens.
//!
//! # Design
//! - Each prop enum is closed; parsing unknown strings yields the default
//!   variant instead of an error.
//! - Mapping functions are pure and framework-independent; the UI crate turns
//!   [`StyleTokens`] into its own class list type.

use crate::items::Trend;
use crate::overlay::OverlayVisual;
use std::borrow::Cow;
use std::str::FromStr;

/// Ordered list of class tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleTokens(Vec<Cow<'static, str>>);

impl StyleTokens {
    /// Start from a single base class.
    #[must_use]
    pub fn new(base: &'static str) -> Self {
        Self(vec![Cow::Borrowed(base)])
    }

    /// Append a token.
    #[must_use]
    pub fn with(mut self, token: impl Into<Cow<'static, str>>) -> Self {
        let token = token.into();
        if !token.is_empty() {
            self.0.push(token);
        }
        self
    }

    /// Append a token when `condition` holds.
    #[must_use]
    pub fn with_if(self, condition: bool, token: &'static str) -> Self {
        if condition { self.with(token) } else { self }
    }

    /// Append a token when present.
    #[must_use]
    pub fn with_opt(self, token: Option<impl Into<Cow<'static, str>>>) -> Self {
        match token {
            Some(token) => self.with(token),
            None => self,
        }
    }

    /// Append every token from `other`.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Whether `token` is present.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    /// Tokens in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Cow<'static, str>> {
        self.0
    }

    /// Space separated class string.
    #[must_use]
    pub fn to_class_string(&self) -> String {
        self.0.join(" ")
    }
}

macro_rules! prop_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        } default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Prop string for the variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Ok(match value {
                    $($text => Self::$variant,)+
                    _ => Self::$default,
                })
            }
        }
    };
}

prop_enum! {
    /// Semantic color tokens.
    Color {
        /// Brand primary.
        Primary => "primary",
        /// Brand secondary.
        Secondary => "secondary",
        /// Accent.
        Accent => "accent",
        /// Neutral.
        Neutral => "neutral",
        /// Informational.
        Info => "info",
        /// Success.
        Success => "success",
        /// Warning.
        Warning => "warning",
        /// Error.
        Error => "error",
    } default Primary
}

prop_enum! {
    /// Sizing scale for controls.
    Size {
        /// Extra small.
        Xs => "xs",
        /// Small.
        Sm => "sm",
        /// Medium.
        Md => "md",
        /// Large.
        Lg => "lg",
        /// Extra large.
        Xl => "xl",
    } default Md
}

impl Size {
    /// `prefix-size` class, e.g. `btn-sm`.
    #[must_use]
    pub fn with_prefix(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.as_str())
    }
}

prop_enum! {
    /// Button fill styles.
    ButtonVariant {
        /// Filled.
        Solid => "solid",
        /// Outline only.
        Outline => "outline",
        /// Transparent until hovered.
        Ghost => "ghost",
        /// Looks like a link.
        Link => "link",
        /// Tinted background.
        Soft => "soft",
    } default Solid
}

prop_enum! {
    /// Badge fill styles.
    BadgeVariant {
        /// Filled.
        Solid => "solid",
        /// Outline only.
        Outline => "outline",
        /// Tinted background.
        Soft => "soft",
        /// Dashed outline.
        Dash => "dash",
    } default Solid
}

prop_enum! {
    /// Card surfaces.
    CardVariant {
        /// Plain raised card.
        Default => "default",
        /// Bordered, no shadow.
        Bordered => "bordered",
        /// Larger shadow.
        Elevated => "elevated",
        /// Transparent surface.
        Ghost => "ghost",
    } default Default
}

prop_enum! {
    /// Inner spacing scale.
    Padding {
        /// No padding.
        None => "none",
        /// Small.
        Sm => "sm",
        /// Medium.
        Md => "md",
        /// Large.
        Lg => "lg",
        /// Extra large.
        Xl => "xl",
    } default Md
}

prop_enum! {
    /// Responsive column counts for grids and stat sections.
    Columns {
        /// Single column.
        One => "1",
        /// Two columns from `md`.
        Two => "2",
        /// Three columns from `lg`.
        Three => "3",
        /// Four columns from `lg`.
        Four => "4",
        /// Six columns from `xl`.
        Six => "6",
    } default Three
}

prop_enum! {
    /// Presentation modes for the file list.
    FileListVariant {
        /// Vertical list rows.
        List => "list",
        /// Stacked cards.
        Card => "card",
        /// Thumbnail grid.
        Grid => "grid",
        /// Table with size/date columns.
        Table => "table",
        /// Compact badges.
        Badge => "badge",
        /// Kind filter chips above a list.
        Filter => "filter",
        /// Comma separated inline names.
        Inline => "inline",
    } default List
}

prop_enum! {
    /// Modal box widths.
    ModalSize {
        /// Small.
        Sm => "sm",
        /// Medium.
        Md => "md",
        /// Large.
        Lg => "lg",
        /// Extra large.
        Xl => "xl",
        /// Full screen.
        Full => "full",
    } default Md
}

prop_enum! {
    /// Edge a drawer slides in from.
    DrawerPlacement {
        /// Left edge.
        Left => "left",
        /// Right edge.
        Right => "right",
        /// Top edge.
        Top => "top",
        /// Bottom edge.
        Bottom => "bottom",
    } default Right
}

prop_enum! {
    /// Alert severities.
    AlertKind {
        /// Informational.
        Info => "info",
        /// Success.
        Success => "success",
        /// Warning.
        Warning => "warning",
        /// Error.
        Error => "error",
    } default Info
}

prop_enum! {
    /// Call-to-action section layouts.
    CtaVariant {
        /// Left aligned text and buttons.
        Simple => "simple",
        /// Centered text and buttons.
        Centered => "centered",
        /// Text and buttons side by side.
        Split => "split",
        /// Full-width colored banner.
        Banner => "banner",
    } default Simple
}

prop_enum! {
    /// Maximum content widths for containers.
    ContainerWidth {
        /// Narrow.
        Sm => "sm",
        /// Medium.
        Md => "md",
        /// Large.
        Lg => "lg",
        /// Extra large.
        Xl => "xl",
        /// No limit.
        Full => "full",
    } default Lg
}

prop_enum! {
    /// Axis for tabs, stacks, dividers and option groups.
    Orientation {
        /// Left to right.
        Horizontal => "horizontal",
        /// Top to bottom.
        Vertical => "vertical",
    } default Vertical
}

prop_enum! {
    /// Tab strip styles.
    TabsStyle {
        /// Boxed tabs.
        Boxed => "boxed",
        /// Underlined tabs.
        Bordered => "bordered",
        /// Lifted tabs.
        Lifted => "lifted",
    } default Bordered
}

prop_enum! {
    /// Avatar masks.
    AvatarShape {
        /// Circle.
        Circle => "circle",
        /// Rounded square.
        Rounded => "rounded",
        /// Square.
        Square => "square",
    } default Circle
}

prop_enum! {
    /// Loading indicator animations.
    LoadingKind {
        /// Spinner.
        Spinner => "spinner",
        /// Dots.
        Dots => "dots",
        /// Ring.
        Ring => "ring",
        /// Bars.
        Bars => "bars",
    } default Spinner
}

prop_enum! {
    /// Background surfaces for page sections.
    Surface {
        /// Page background.
        Base => "base",
        /// Slightly darker band.
        Muted => "muted",
        /// Darkest neutral band.
        Contrast => "contrast",
        /// Brand color band.
        Primary => "primary",
    } default Base
}

/// `prefix-color` class, e.g. `btn-primary`.
#[must_use]
pub fn tone_class(prefix: &str, tone: Option<Color>) -> Option<String> {
    tone.map(|color| format!("{prefix}-{}", color.as_str()))
}

/// Button classes.
#[must_use]
pub fn button_tokens(
    variant: ButtonVariant,
    size: Size,
    tone: Option<Color>,
    block: bool,
) -> StyleTokens {
    let variant_class = match variant {
        ButtonVariant::Solid => None,
        ButtonVariant::Outline => Some("btn-outline"),
        ButtonVariant::Ghost => Some("btn-ghost"),
        ButtonVariant::Link => Some("btn-link"),
        ButtonVariant::Soft => Some("btn-soft"),
    };
    StyleTokens::new("btn")
        .with_opt(variant_class)
        .with(size.with_prefix("btn"))
        .with_opt(tone_class("btn", tone))
        .with_if(block, "btn-block")
}

/// Badge classes.
#[must_use]
pub fn badge_tokens(variant: BadgeVariant, size: Size, tone: Option<Color>) -> StyleTokens {
    let variant_class = match variant {
        BadgeVariant::Solid => None,
        BadgeVariant::Outline => Some("badge-outline"),
        BadgeVariant::Soft => Some("badge-soft"),
        BadgeVariant::Dash => Some("badge-dash"),
    };
    StyleTokens::new("badge")
        .with_opt(variant_class)
        .with(size.with_prefix("badge"))
        .with_opt(tone_class("badge", tone))
}

/// Padding utility for all sides.
#[must_use]
pub const fn padding_class(padding: Padding) -> &'static str {
    match padding {
        Padding::None => "p-0",
        Padding::Sm => "p-3",
        Padding::Md => "p-6",
        Padding::Lg => "p-8",
        Padding::Xl => "p-12",
    }
}

/// Vertical padding utility used by page sections.
#[must_use]
pub const fn section_padding_class(padding: Padding) -> &'static str {
    match padding {
        Padding::None => "py-0",
        Padding::Sm => "py-6",
        Padding::Md => "py-12",
        Padding::Lg => "py-16",
        Padding::Xl => "py-24",
    }
}

/// Background and text colors for a section surface.
#[must_use]
pub fn surface_tokens(surface: Surface) -> StyleTokens {
    match surface {
        Surface::Base => StyleTokens::new("bg-base-100"),
        Surface::Muted => StyleTokens::new("bg-base-200"),
        Surface::Contrast => StyleTokens::new("bg-neutral").with("text-neutral-content"),
        Surface::Primary => StyleTokens::new("bg-primary").with("text-primary-content"),
    }
}

/// Gap utility derived from the padding scale.
#[must_use]
pub const fn gap_class(gap: Padding) -> &'static str {
    match gap {
        Padding::None => "gap-0",
        Padding::Sm => "gap-2",
        Padding::Md => "gap-4",
        Padding::Lg => "gap-6",
        Padding::Xl => "gap-8",
    }
}

/// Card classes.
#[must_use]
pub fn card_tokens(variant: CardVariant, padding: Padding, selected: bool) -> StyleTokens {
    let surface = match variant {
        CardVariant::Default => StyleTokens::new("card").with("bg-base-100").with("shadow"),
        CardVariant::Bordered => StyleTokens::new("card").with("card-border").with("bg-base-100"),
        CardVariant::Elevated => StyleTokens::new("card").with("bg-base-100").with("shadow-xl"),
        CardVariant::Ghost => StyleTokens::new("card").with("bg-transparent"),
    };
    let body = match padding {
        Padding::None | Padding::Md => None,
        Padding::Sm => Some("card-sm"),
        Padding::Lg | Padding::Xl => Some("card-lg"),
    };
    surface
        .with_opt(body)
        .with_if(selected, "ring-2")
        .with_if(selected, "ring-primary")
}

/// Grid column classes with responsive breakpoints.
#[must_use]
pub fn grid_tokens(columns: Columns) -> StyleTokens {
    let base = StyleTokens::new("grid").with("grid-cols-1");
    match columns {
        Columns::One => base,
        Columns::Two => base.with("md:grid-cols-2"),
        Columns::Three => base.with("md:grid-cols-2").with("lg:grid-cols-3"),
        Columns::Four => base.with("sm:grid-cols-2").with("lg:grid-cols-4"),
        Columns::Six => base
            .with("sm:grid-cols-2")
            .with("lg:grid-cols-3")
            .with("xl:grid-cols-6"),
    }
}

/// Container width classes.
#[must_use]
pub fn container_tokens(width: ContainerWidth, padding: Padding) -> StyleTokens {
    let max = match width {
        ContainerWidth::Sm => "max-w-screen-sm",
        ContainerWidth::Md => "max-w-screen-md",
        ContainerWidth::Lg => "max-w-screen-lg",
        ContainerWidth::Xl => "max-w-screen-xl",
        ContainerWidth::Full => "max-w-none",
    };
    let inline = match padding {
        Padding::None => "px-0",
        Padding::Sm => "px-2",
        Padding::Md => "px-4",
        Padding::Lg => "px-6",
        Padding::Xl => "px-8",
    };
    StyleTokens::new("mx-auto").with("w-full").with(max).with(inline)
}

/// Stack (flex) classes.
#[must_use]
pub fn stack_tokens(direction: Orientation, gap: Padding) -> StyleTokens {
    let axis = match direction {
        Orientation::Horizontal => "flex-row",
        Orientation::Vertical => "flex-col",
    };
    StyleTokens::new("flex").with(axis).with(gap_class(gap))
}

/// Alert classes.
#[must_use]
pub fn alert_tokens(kind: AlertKind) -> StyleTokens {
    let tone = match kind {
        AlertKind::Info => "alert-info",
        AlertKind::Success => "alert-success",
        AlertKind::Warning => "alert-warning",
        AlertKind::Error => "alert-error",
    };
    StyleTokens::new("alert").with(tone)
}

/// Iconify icon for an alert severity.
#[must_use]
pub const fn alert_icon(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Info => "lucide--info",
        AlertKind::Success => "lucide--circle-check",
        AlertKind::Warning => "lucide--triangle-alert",
        AlertKind::Error => "lucide--circle-x",
    }
}

/// Tab strip classes.
#[must_use]
pub fn tabs_tokens(style: TabsStyle, size: Size, orientation: Orientation) -> StyleTokens {
    let style_class = match style {
        TabsStyle::Boxed => "tabs-box",
        TabsStyle::Bordered => "tabs-border",
        TabsStyle::Lifted => "tabs-lift",
    };
    StyleTokens::new("tabs")
        .with(style_class)
        .with(size.with_prefix("tabs"))
        .with_if(orientation == Orientation::Vertical, "flex-col")
}

/// Layout classes for the option list of radio/checkbox groups.
#[must_use]
pub fn option_group_tokens(orientation: Orientation) -> StyleTokens {
    match orientation {
        Orientation::Horizontal => StyleTokens::new("flex")
            .with("flex-row")
            .with("flex-wrap")
            .with("gap-4"),
        Orientation::Vertical => StyleTokens::new("flex").with("flex-col").with("gap-2"),
    }
}

/// Avatar classes.
#[must_use]
pub fn avatar_tokens(size: Size, shape: AvatarShape) -> StyleTokens {
    let width = match size {
        Size::Xs => "w-6",
        Size::Sm => "w-8",
        Size::Md => "w-12",
        Size::Lg => "w-16",
        Size::Xl => "w-24",
    };
    let mask = match shape {
        AvatarShape::Circle => "rounded-full",
        AvatarShape::Rounded => "rounded-xl",
        AvatarShape::Square => "rounded-none",
    };
    StyleTokens::new(width).with(mask)
}

/// Loading indicator classes.
#[must_use]
pub fn loading_tokens(kind: LoadingKind, size: Size) -> StyleTokens {
    let kind_class = match kind {
        LoadingKind::Spinner => "loading-spinner",
        LoadingKind::Dots => "loading-dots",
        LoadingKind::Ring => "loading-ring",
        LoadingKind::Bars => "loading-bars",
    };
    StyleTokens::new("loading").with(kind_class).with(size.with_prefix("loading"))
}

/// Stat value color for a trend.
#[must_use]
pub const fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "text-success",
        Trend::Down => "text-error",
        Trend::Neutral => "text-base-content/70",
    }
}

/// Iconify icon for a trend.
#[must_use]
pub const fn trend_icon(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "lucide--trending-up",
        Trend::Down => "lucide--trending-down",
        Trend::Neutral => "lucide--minus",
    }
}

/// Container classes for each file list presentation.
#[must_use]
pub fn file_list_tokens(variant: FileListVariant) -> StyleTokens {
    match variant {
        FileListVariant::List | FileListVariant::Filter => {
            StyleTokens::new("list").with("bg-base-100").with("rounded-box")
        }
        FileListVariant::Card => StyleTokens::new("flex").with("flex-col").with("gap-3"),
        FileListVariant::Grid => grid_tokens(Columns::Four).with("gap-4"),
        FileListVariant::Table => StyleTokens::new("table").with("table-zebra"),
        FileListVariant::Badge => StyleTokens::new("flex").with("flex-wrap").with("gap-2"),
        FileListVariant::Inline => StyleTokens::new("inline").with("text-sm"),
    }
}

/// Call-to-action section classes.
#[must_use]
pub fn cta_tokens(variant: CtaVariant) -> StyleTokens {
    match variant {
        CtaVariant::Simple => StyleTokens::new("flex").with("flex-col").with("gap-4"),
        CtaVariant::Centered => StyleTokens::new("flex")
            .with("flex-col")
            .with("items-center")
            .with("text-center")
            .with("gap-4"),
        CtaVariant::Split => StyleTokens::new("flex")
            .with("flex-col")
            .with("lg:flex-row")
            .with("lg:items-center")
            .with("lg:justify-between")
            .with("gap-6"),
        CtaVariant::Banner => StyleTokens::new("flex")
            .with("flex-col")
            .with("items-center")
            .with("text-center")
            .with("gap-4")
            .with("bg-primary")
            .with("text-primary-content")
            .with("rounded-box")
            .with("p-10"),
    }
}

/// Backdrop classes; opacity animates with the overlay visual.
#[must_use]
pub fn backdrop_tokens(visual: OverlayVisual) -> StyleTokens {
    StyleTokens::new("fixed")
        .with("inset-0")
        .with("bg-black/50")
        .with("transition-opacity")
        .with("duration-300")
        .with(match visual {
            OverlayVisual::Open => "opacity-100",
            OverlayVisual::Closed => "opacity-0",
        })
}

/// Modal box classes.
#[must_use]
pub fn modal_box_tokens(size: ModalSize, visual: OverlayVisual) -> StyleTokens {
    let width = match size {
        ModalSize::Sm => "max-w-sm",
        ModalSize::Md => "max-w-lg",
        ModalSize::Lg => "max-w-3xl",
        ModalSize::Xl => "max-w-5xl",
        ModalSize::Full => "max-w-none",
    };
    let motion = match visual {
        OverlayVisual::Open => StyleTokens::default().with("opacity-100").with("scale-100"),
        OverlayVisual::Closed => StyleTokens::default().with("opacity-0").with("scale-95"),
    };
    StyleTokens::new("modal-box")
        .with("relative")
        .with("w-full")
        .with(width)
        .with_if(size == ModalSize::Full, "h-full")
        .with("transition-all")
        .with("duration-300")
        .merge(motion)
}

/// Drawer panel classes; the closed visual translates the panel off its edge.
#[must_use]
pub fn drawer_panel_tokens(
    placement: DrawerPlacement,
    size: Size,
    visual: OverlayVisual,
) -> StyleTokens {
    let (anchor, extent, hidden) = match placement {
        DrawerPlacement::Left => ("left-0 inset-y-0", "h-full", "-translate-x-full"),
        DrawerPlacement::Right => ("right-0 inset-y-0", "h-full", "translate-x-full"),
        DrawerPlacement::Top => ("top-0 inset-x-0", "w-full", "-translate-y-full"),
        DrawerPlacement::Bottom => ("bottom-0 inset-x-0", "w-full", "translate-y-full"),
    };
    let horizontal = matches!(placement, DrawerPlacement::Left | DrawerPlacement::Right);
    let span = match (horizontal, size) {
        (true, Size::Xs) => "w-64",
        (true, Size::Sm) => "w-72",
        (true, Size::Md) => "w-96",
        (true, Size::Lg) => "w-[32rem]",
        (true, Size::Xl) => "w-[48rem]",
        (false, Size::Xs) => "h-32",
        (false, Size::Sm) => "h-48",
        (false, Size::Md) => "h-64",
        (false, Size::Lg) => "h-96",
        (false, Size::Xl) => "h-[75vh]",
    };
    let position = anchor
        .split(' ')
        .fold(StyleTokens::new("fixed"), |tokens, class| tokens.with(class));
    position
        .with(extent)
        .with(span)
        .with("max-w-full")
        .with("bg-base-100")
        .with("shadow-xl")
        .with("flex")
        .with("flex-col")
        .with("transition-transform")
        .with("duration-300")
        .merge(match visual {
            OverlayVisual::Open => StyleTokens::default()
                .with("translate-x-0")
                .with("translate-y-0"),
            OverlayVisual::Closed => StyleTokens::default().with(hidden),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_prop_strings_fall_back_to_default() {
        assert_eq!("table".parse::<FileListVariant>(), Ok(FileListVariant::Table));
        assert_eq!("carousel".parse::<FileListVariant>(), Ok(FileListVariant::List));
        assert_eq!("giant".parse::<Size>(), Ok(Size::Md));
        assert_eq!("6".parse::<Columns>(), Ok(Columns::Six));
    }

    #[test]
    fn file_list_variants_cover_documented_set() {
        let names: Vec<&str> = FileListVariant::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(
            names,
            vec!["list", "card", "grid", "table", "badge", "filter", "inline"]
        );
    }

    #[test]
    fn button_tokens_compose_variant_size_and_tone() {
        let tokens = button_tokens(ButtonVariant::Outline, Size::Sm, Some(Color::Error), true);
        assert_eq!(
            tokens.to_class_string(),
            "btn btn-outline btn-sm btn-error btn-block"
        );
        let solid = button_tokens(ButtonVariant::Solid, Size::Md, None, false);
        assert_eq!(solid.to_class_string(), "btn btn-md");
    }

    #[test]
    fn grid_columns_are_responsive() {
        assert_eq!(grid_tokens(Columns::One).to_class_string(), "grid grid-cols-1");
        assert!(grid_tokens(Columns::Six).contains("xl:grid-cols-6"));
    }

    #[test]
    fn overlay_tokens_follow_visual() {
        assert!(backdrop_tokens(OverlayVisual::Closed).contains("opacity-0"));
        assert!(backdrop_tokens(OverlayVisual::Open).contains("opacity-100"));
        assert!(modal_box_tokens(ModalSize::Full, OverlayVisual::Open).contains("h-full"));
        let closed = drawer_panel_tokens(DrawerPlacement::Left, Size::Md, OverlayVisual::Closed);
        assert!(closed.contains("-translate-x-full"));
        assert!(closed.contains("w-96"));
        let bottom = drawer_panel_tokens(DrawerPlacement::Bottom, Size::Sm, OverlayVisual::Closed);
        assert!(bottom.contains("translate-y-full"));
        assert!(bottom.contains("h-48"));
    }

    #[test]
    fn card_selection_adds_ring() {
        let tokens = card_tokens(CardVariant::Bordered, Padding::Sm, true);
        assert!(tokens.contains("card-border"));
        assert!(tokens.contains("card-sm"));
        assert!(tokens.contains("ring-primary"));
    }

    #[test]
    fn empty_tokens_are_skipped() {
        let tokens = StyleTokens::new("a").with("").with_opt(None::<&'static str>);
        assert_eq!(tokens.into_vec().len(), 1);
    }

    #[test]
    fn section_surfaces_pair_background_with_text() {
        assert_eq!(surface_tokens(Surface::default()).to_class_string(), "bg-base-100");
        assert_eq!(
            surface_tokens(Surface::Primary).to_class_string(),
            "bg-primary text-primary-content"
        );
    }

    #[test]
    fn trend_maps_to_color() {
        assert_eq!(trend_class(Trend::Up), "text-success");
        assert_eq!(trend_icon(Trend::Down), "lucide--trending-down");
    }
}
