use crate::core::visibility::VisibilityRule;
use crate::sections::{FieldGroup, SectionContext};
use crate::widgets::mount::{MultiEntryFlags, WidgetKind};
use crate::widgets::node::Node;

const IS_DOMESTIC_OPTIONS: [&str; 3] = ["yes", "no", "mixed domestic/non-domestic"];

const IS_DOMESTIC_SOURCE_OPTIONS: [&str; 4] = [
    "Citizen/passerby",
    "Google or other photograph/satellite imagery",
    "Government Record",
    "Other Record",
];

/// Sources that are observations rather than documents; no link to collect.
const LANDUSE_LINK_HIDDEN: [&str; 2] = [
    "Expert/personal knowledge of building",
    "Online streetview image",
];

fn landuse_link_rule() -> VisibilityRule {
    VisibilityRule::unless_in("current_landuse_source", LANDUSE_LINK_HIDDEN)
}

/// Land-use fields: the domestic/non-domestic split and the specific
/// land-use classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct LandUseSection;

impl FieldGroup for LandUseSection {
    fn title(&self) -> &str {
        "Land Use"
    }

    fn render(&self, ctx: &SectionContext<'_>) -> Vec<Node> {
        vec![
            Node::group("Domestic or non-domestic use", false, self.domestic_group(ctx)),
            Node::group("Specific Land Use", false, self.landuse_group(ctx)),
        ]
    }
}

impl LandUseSection {
    fn domestic_group(&self, ctx: &SectionContext<'_>) -> Vec<Node> {
        let building = ctx.building;
        vec![
            Node::info(
                "93% of properties in UK are dwellings so we have set 'residential' as the \
                 default value. Can you help us identify non-residential and mixed use \
                 buildings (and verify residential buildings too)?",
            ),
            Node::map_switcher(
                "is_domestic",
                ctx.map_colour_scale == Some("is_domestic"),
            ),
            Node::widget(
                ctx.mount(
                    "is_domestic",
                    WidgetKind::Select {
                        value: building.value("is_domestic").clone(),
                        options: IS_DOMESTIC_OPTIONS.map(String::from).to_vec(),
                    },
                )
                .with_verification(ctx.verification("is_domestic")),
            ),
            Node::warning(
                "Note: Work from home does not count as office and does not make building \
                 non-domestic.",
            ),
            Node::widget(ctx.mount(
                "is_domestic_source",
                WidgetKind::Select {
                    value: building.value("is_domestic_source").clone(),
                    options: IS_DOMESTIC_SOURCE_OPTIONS.map(String::from).to_vec(),
                },
            )),
            // Source-link entry is not collected yet; mounted inert.
            Node::widget(
                ctx.mount(
                    "is_domestic_link",
                    WidgetKind::Text {
                        value: building.value("is_domestic_link").clone(),
                    },
                )
                .disabled(),
            ),
        ]
    }

    fn landuse_group(&self, ctx: &SectionContext<'_>) -> Vec<Node> {
        let building = ctx.building;
        let mut nodes = vec![
            Node::widget(
                ctx.mount(
                    "current_landuse_group",
                    WidgetKind::MultiEntry {
                        values: building.value("current_landuse_group").clone(),
                        flags: MultiEntryFlags {
                            confirm_on_enter: true,
                            copyable: true,
                            autofill: true,
                            show_all_options_on_empty: true,
                            ..MultiEntryFlags::default()
                        },
                    },
                )
                .with_placeholder("Type new land use group here")
                .with_verification(ctx.verification("current_landuse_group")),
            ),
            Node::widget(ctx.mount(
                "current_landuse_source",
                WidgetKind::Select {
                    value: building.value("current_landuse_source").clone(),
                    options: ctx.options("current_landuse_source"),
                },
            )),
        ];

        if landuse_link_rule().is_visible(building) {
            nodes.push(Node::widget(
                ctx.mount(
                    "current_landuse_link",
                    WidgetKind::MultiEntry {
                        values: building.value("current_landuse_link").clone(),
                        flags: MultiEntryFlags {
                            editable_entries: true,
                            is_url: true,
                            ..MultiEntryFlags::default()
                        },
                    },
                )
                .with_placeholder("https://..."),
            ));
        }

        if !ctx.mode.is_view() {
            nodes.push(Node::info(
                "A more general classification for the land use of this building is \
                 automatically derived and shown below.",
            ));
        }

        nodes.push(Node::widget(
            ctx.mount(
                "current_landuse_order",
                WidgetKind::Text {
                    value: building.value("current_landuse_order").clone(),
                },
            )
            .disabled(),
        ));

        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::LandUseSection;
    use crate::core::catalog::FieldCatalog;
    use crate::core::clock::FixedClock;
    use crate::core::mode::RenderMode;
    use crate::core::record::{BuildingRecord, UserAccount};
    use crate::sections::{FieldGroup, SectionContext};
    use crate::widgets::node::{Node, find_widget};

    fn catalog() -> FieldCatalog {
        FieldCatalog::building_attributes()
    }

    #[test]
    fn streetview_source_hides_the_landuse_link() {
        let catalog = catalog();
        let clock = FixedClock(2026);
        let record = BuildingRecord::new()
            .with_field("is_domestic", "yes")
            .with_field("current_landuse_source", "Online streetview image");
        let ctx = SectionContext::new(&record, &catalog, &clock);

        let nodes = LandUseSection.render(&ctx);
        assert!(find_widget(&nodes, "current_landuse_link").is_none());
    }

    #[test]
    fn documented_source_mounts_the_landuse_link() {
        let catalog = catalog();
        let clock = FixedClock(2026);
        let record =
            BuildingRecord::new().with_field("current_landuse_source", "Government record");
        let ctx = SectionContext::new(&record, &catalog, &clock);

        let nodes = LandUseSection.render(&ctx);
        assert!(find_widget(&nodes, "current_landuse_link").is_some());
    }

    #[test]
    fn domestic_source_link_is_an_inert_placeholder() {
        let catalog = catalog();
        let clock = FixedClock(2026);
        let user = UserAccount::new("mapper");
        let record = BuildingRecord::new().with_field("is_domestic", "yes");
        let ctx = SectionContext::new(&record, &catalog, &clock).with_user(&user);

        let nodes = LandUseSection.render(&ctx);
        let link = find_widget(&nodes, "is_domestic_link").expect("placeholder widget");
        assert!(link.disabled);
        assert!(link.verification.is_none());
        assert_eq!(link.title, "Please provide a link to the data source");
        assert_eq!(link.tooltip.as_deref(), Some("Coming Soon"));
    }

    #[test]
    fn derived_order_is_disabled_and_unverifiable() {
        let catalog = catalog();
        let clock = FixedClock(2026);
        let user = UserAccount::new("mapper");
        let record = BuildingRecord::new()
            .with_field("current_landuse_order", "Residential")
            .with_field("current_landuse_group", vec!["Residential".to_string()]);
        let ctx = SectionContext::new(&record, &catalog, &clock)
            .with_user(&user)
            .with_mode(RenderMode::Edit);

        let nodes = LandUseSection.render(&ctx);
        let order = find_widget(&nodes, "current_landuse_order").expect("order widget");
        assert!(order.disabled);
        assert!(order.verification.is_none());

        // The editable group next to it does verify.
        let group = find_widget(&nodes, "current_landuse_group").expect("group widget");
        assert!(group.verification.is_some());
    }

    #[test]
    fn derived_value_note_shows_only_outside_view_mode() {
        let catalog = catalog();
        let clock = FixedClock(2026);
        let record = BuildingRecord::new();

        let note = "A more general classification for the land use of this building is \
                    automatically derived and shown below.";
        let has_note = |nodes: &[Node]| {
            nodes.iter().any(|node| match node {
                Node::Group { children, .. } => children
                    .iter()
                    .any(|child| matches!(child, Node::Info { text, .. } if text == note)),
                _ => false,
            })
        };

        let view_ctx = SectionContext::new(&record, &catalog, &clock);
        assert!(!has_note(&LandUseSection.render(&view_ctx)));

        let edit_ctx =
            SectionContext::new(&record, &catalog, &clock).with_mode(RenderMode::Edit);
        assert!(has_note(&LandUseSection.render(&edit_ctx)));
    }

    #[test]
    fn map_switcher_reflects_the_active_colour_scale() {
        let catalog = catalog();
        let clock = FixedClock(2026);
        let record = BuildingRecord::new();

        let switcher_active = |nodes: &[Node]| {
            nodes.iter().find_map(|node| match node {
                Node::Group { children, .. } => children.iter().find_map(|child| match child {
                    Node::MapSwitcher { scale, active } if scale == "is_domestic" => {
                        Some(*active)
                    }
                    _ => None,
                }),
                _ => None,
            })
        };

        let plain = SectionContext::new(&record, &catalog, &clock);
        assert_eq!(switcher_active(&LandUseSection.render(&plain)), Some(false));

        let coloured = SectionContext::new(&record, &catalog, &clock)
            .with_map_colour_scale("is_domestic");
        assert_eq!(
            switcher_active(&LandUseSection.render(&coloured)),
            Some(true)
        );
    }

    #[test]
    fn groups_keep_their_names_and_stay_expanded() {
        let catalog = catalog();
        let clock = FixedClock(2026);
        let record = BuildingRecord::new();
        let ctx = SectionContext::new(&record, &catalog, &clock);

        let nodes = LandUseSection.render(&ctx);
        let names: Vec<(&str, bool)> = nodes
            .iter()
            .filter_map(|node| match node {
                Node::Group {
                    name, collapsed, ..
                } => Some((name.as_str(), *collapsed)),
                _ => None,
            })
            .collect();
        assert_eq!(
            names,
            vec![
                ("Domestic or non-domestic use", false),
                ("Specific Land Use", false)
            ]
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let catalog = catalog();
        let clock = FixedClock(2026);
        let record = BuildingRecord::new()
            .with_field("is_domestic", "yes")
            .with_field("current_landuse_source", "Open planning authority dataset");
        let ctx = SectionContext::new(&record, &catalog, &clock);

        assert_eq!(LandUseSection.render(&ctx), LandUseSection.render(&ctx));
    }
}
