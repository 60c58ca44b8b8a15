use bevy::prelude::*;

// Button style definitions shared by the picker widgets
pub struct ButtonStyle {
    pub normal: Color,
    pub hover: Color,
    pub pressed: Color,
    pub selected: Color,
}

impl ButtonStyle {
    pub const FILE_ENTRY: Self = Self {
        normal: Color::srgba(0.2, 0.2, 0.2, 0.8),
        hover: Color::srgba(0.3, 0.3, 0.3, 0.9),
        pressed: Color::srgba(0.2, 0.5, 0.8, 0.9),
        selected: Color::srgba(0.25, 0.4, 0.6, 0.9),
    };

    pub const ACTION: Self = Self {
        normal: Color::srgb(0.2, 0.45, 0.3),
        hover: Color::srgb(0.25, 0.6, 0.35),
        pressed: Color::srgb(0.2, 0.7, 0.3),
        selected: Color::srgb(0.2, 0.45, 0.3),
    };

    /// Background for the given interaction, with `selected` taking the
    /// place of `normal` for the highlighted entry.
    pub fn color_for(&self, interaction: Interaction, selected: bool) -> Color {
        match interaction {
            Interaction::Pressed => self.pressed,
            Interaction::Hovered => self.hover,
            Interaction::None if selected => self.selected,
            Interaction::None => self.normal,
        }
    }
}

/// Spawns a button with a single centered label.
pub fn spawn_text_button(
    parent: &mut ChildBuilder,
    label: &str,
    node: Node,
    style: &ButtonStyle,
    font_size: f32,
    marker: impl Bundle,
) {
    parent
        .spawn((
            Button,
            node,
            BackgroundColor(style.normal),
            BorderColor(Color::srgb(0.5, 0.5, 0.5)),
            marker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(label),
                TextFont {
                    font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_entry_only_overrides_idle_color() {
        let style = ButtonStyle::FILE_ENTRY;

        assert_eq!(style.color_for(Interaction::None, true), style.selected);
        assert_eq!(style.color_for(Interaction::None, false), style.normal);
        assert_eq!(style.color_for(Interaction::Hovered, true), style.hover);
        assert_eq!(style.color_for(Interaction::Pressed, false), style.pressed);
    }
}
