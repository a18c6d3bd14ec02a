use bevy::prelude::*;

use super::hit_test::hit_test_markers;
use crate::globe::TooltipConfig;
use crate::schedule::FrameSet;

/// Above every other UI node
const TOOLTIP_Z_INDEX: i32 = 1_000;

pub struct TooltipPlugin;

impl Plugin for TooltipPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Tooltip>()
            .add_systems(Startup, spawn_tooltip_node)
            .add_systems(
                Update,
                sync_tooltip_node
                    .after(hit_test_markers)
                    .in_set(FrameSet::HitTest),
            );
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering {
        marker: Entity,
    },
}

/// What the tooltip should show. Leaving a marker fades the text at once but
/// keeps the box in place until `hide_deadline`, so moving between markers
/// that sit close together doesn't flicker.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct Tooltip {
    hover:         HoverState,
    text:          String,
    position:      Vec2,
    opacity:       f32,
    visible:       bool,
    hide_deadline: Option<f32>,
}

impl Tooltip {
    pub fn hover(&mut self, marker: Entity, name: &str, position: Vec2) {
        if self.hover != (HoverState::Hovering { marker }) {
            debug!("hovering {name}");
        }
        self.hover = HoverState::Hovering { marker };
        if self.text != name {
            name.clone_into(&mut self.text);
        }
        self.position = position;
        self.opacity = 1.0;
        self.visible = true;
        // re-entering before the deadline cancels the pending hide
        self.hide_deadline = None;
    }

    /// Call every frame nothing is hit
    pub fn release(&mut self, now: f32, hide_delay: f32) {
        if matches!(self.hover, HoverState::Hovering { .. }) {
            self.hover = HoverState::Idle;
            self.hide_deadline = Some(now + hide_delay);
        }
        self.opacity = 0.0;

        if self.hide_deadline.is_some_and(|deadline| now >= deadline) {
            self.visible = false;
            self.hide_deadline = None;
        }
    }

    pub const fn is_hovering(&self) -> bool { matches!(self.hover, HoverState::Hovering { .. }) }

    #[cfg(test)]
    pub const fn hover_state(&self) -> HoverState { self.hover }

    pub fn text(&self) -> &str { &self.text }

    pub const fn position(&self) -> Vec2 { self.position }

    pub const fn opacity(&self) -> f32 { self.opacity }

    pub const fn is_visible(&self) -> bool { self.visible }
}

#[derive(Component)]
struct TooltipNode;

fn corner_radius(config: &TooltipConfig) -> BorderRadius {
    BorderRadius::all(Val::Px(config.corner_radius))
}

/// Drop shadow faded along with the rest of the tooltip
fn drop_shadow(config: &TooltipConfig, opacity: f32) -> BoxShadow {
    BoxShadow::new(
        config
            .shadow_color
            .with_alpha(config.shadow_color.alpha() * opacity),
        Val::Px(config.shadow_offset.x),
        Val::Px(config.shadow_offset.y),
        Val::ZERO,
        Val::Px(config.shadow_blur),
    )
}

fn spawn_tooltip_node(mut commands: Commands, config: Res<TooltipConfig>) {
    commands.spawn((
        Name::new("Tooltip"),
        TooltipNode,
        Text::new(""),
        TextFont {
            font_size: config.font_size,
            ..default()
        },
        TextColor(config.text_color),
        Node {
            position_type: PositionType::Absolute,
            padding: UiRect::axes(Val::Px(config.padding.x), Val::Px(config.padding.y)),
            border: UiRect::all(Val::Px(config.border_width)),
            border_radius: corner_radius(&config),
            ..default()
        },
        BackgroundColor(config.background),
        BorderColor::all(config.border_color),
        drop_shadow(&config, 0.0),
        GlobalZIndex(TOOLTIP_Z_INDEX),
        Visibility::Hidden,
    ));
}

fn sync_tooltip_node(
    tooltip: Res<Tooltip>,
    config: Res<TooltipConfig>,
    node: Single<
        (
            &mut Text,
            &mut TextFont,
            &mut TextColor,
            &mut Node,
            &mut BackgroundColor,
            &mut BorderColor,
            &mut BoxShadow,
            &mut Visibility,
        ),
        With<TooltipNode>,
    >,
) {
    if !tooltip.is_changed() && !config.is_changed() {
        return;
    }

    let (
        mut text,
        mut font,
        mut text_color,
        mut node,
        mut background,
        mut border,
        mut shadow,
        mut visibility,
    ) = node.into_inner();

    if text.0 != tooltip.text() {
        tooltip.text().clone_into(&mut text.0);
    }
    font.font_size = config.font_size;

    let opacity = tooltip.opacity();
    text_color.0 = config
        .text_color
        .with_alpha(config.text_color.alpha() * opacity);
    background.0 = config
        .background
        .with_alpha(config.background.alpha() * opacity);
    *border = BorderColor::all(
        config
            .border_color
            .with_alpha(config.border_color.alpha() * opacity),
    );
    *shadow = drop_shadow(&config, opacity);

    let position = tooltip.position();
    node.left = Val::Px(position.x);
    node.top = Val::Px(position.y);
    node.padding = UiRect::axes(Val::Px(config.padding.x), Val::Px(config.padding.y));
    node.border = UiRect::all(Val::Px(config.border_width));
    node.border_radius = corner_radius(&config);

    visibility.set_if_neq(if tooltip.is_visible() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globe::GlobeVariant;

    const DELAY: f32 = 0.2;

    fn markers() -> (Entity, Entity) {
        let mut world = World::new();
        (world.spawn_empty().id(), world.spawn_empty().id())
    }

    #[test]
    fn test_hover_shows_name_at_position() {
        let (tokyo, _) = markers();
        let mut tooltip = Tooltip::default();
        assert!(!tooltip.is_visible());

        tooltip.hover(tokyo, "Tokyo", Vec2::new(110.0, 60.0));

        assert!(tooltip.is_visible());
        assert!(tooltip.is_hovering());
        assert_eq!(tooltip.text(), "Tokyo");
        assert_eq!(tooltip.position(), Vec2::new(110.0, 60.0));
        assert_eq!(tooltip.hover_state(), HoverState::Hovering { marker: tokyo });
    }

    #[test]
    fn test_release_fades_then_hides_after_delay() {
        let (tokyo, _) = markers();
        let mut tooltip = Tooltip::default();
        tooltip.hover(tokyo, "Tokyo", Vec2::ZERO);

        tooltip.release(1.0, DELAY);
        assert!(!tooltip.is_hovering());
        assert!(tooltip.opacity().abs() < f32::EPSILON);
        assert!(tooltip.is_visible());

        tooltip.release(1.1, DELAY);
        assert!(tooltip.is_visible());

        tooltip.release(1.25, DELAY);
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn test_reentry_before_deadline_cancels_hide() {
        let (tokyo, seoul) = markers();
        let mut tooltip = Tooltip::default();
        tooltip.hover(tokyo, "Tokyo", Vec2::ZERO);
        tooltip.release(1.0, DELAY);

        tooltip.hover(seoul, "Seoul", Vec2::ONE);
        assert_eq!(tooltip.text(), "Seoul");
        assert!((tooltip.opacity() - 1.0).abs() < f32::EPSILON);

        // the first deadline (1.2) has passed, a new release gets its own delay
        tooltip.release(1.3, DELAY);
        assert!(tooltip.is_visible());
        tooltip.release(1.4, DELAY);
        assert!(tooltip.is_visible());
        tooltip.release(1.6, DELAY);
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn test_release_without_hover_stays_hidden() {
        let mut tooltip = Tooltip::default();
        tooltip.release(0.0, DELAY);
        tooltip.release(10.0, DELAY);
        assert_eq!(tooltip, Tooltip::default());
    }

    #[test]
    fn test_zero_delay_hides_immediately() {
        let (tokyo, _) = markers();
        let mut tooltip = Tooltip::default();
        tooltip.hover(tokyo, "Tokyo", Vec2::ZERO);
        tooltip.release(3.0, 0.0);
        assert!(!tooltip.is_visible());
    }

    fn tooltip_style(app: &mut App) -> Vec<(Node, BoxShadow, Visibility)> {
        app.world_mut()
            .query_filtered::<(&Node, &BoxShadow, &Visibility), With<TooltipNode>>()
            .iter(app.world())
            .map(|(node, shadow, visibility)| (node.clone(), shadow.clone(), *visibility))
            .collect()
    }

    #[test]
    fn test_tooltip_node_is_rounded_and_shadow_follows_opacity() {
        let config = TooltipConfig::for_variant(GlobeVariant::Minimal);
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(config.clone())
            .init_resource::<Tooltip>()
            .add_systems(Startup, spawn_tooltip_node)
            .add_systems(Update, sync_tooltip_node);

        let marker = app.world_mut().spawn_empty().id();
        app.world_mut()
            .resource_mut::<Tooltip>()
            .hover(marker, "Oslo", Vec2::new(40.0, 30.0));
        app.update();

        let shown = tooltip_style(&mut app);
        assert_eq!(shown.len(), 1);
        for (node, shadow, visibility) in shown {
            assert_eq!(node.border_radius, BorderRadius::all(Val::Px(9_999.0)));
            assert_eq!(node.left, Val::Px(40.0));
            assert_eq!(visibility, Visibility::Inherited);
            assert_eq!(shadow, drop_shadow(&config, 1.0));
            assert_eq!(shadow.0.len(), 1);
        }

        app.world_mut().resource_mut::<Tooltip>().release(0.0, DELAY);
        app.update();

        for (_, shadow, _) in tooltip_style(&mut app) {
            assert!(shadow.0.iter().all(|style| style.color.alpha().abs() < f32::EPSILON));
        }
    }
}
