use crate::core::visibility::VisibilityRule;
use crate::sections::{FieldGroup, SectionContext};
use crate::widgets::mount::{MultiEntryFlags, WidgetKind};
use crate::widgets::node::Node;

/// Source values that carry no further documentation, so the source-link
/// widget stays hidden for them.
const DATE_LINK_HIDDEN: [&str; 2] = [
    "Expert knowledge of building",
    "Expert estimate from image",
];

fn date_link_rule() -> VisibilityRule {
    VisibilityRule::unless_in("date_source", DATE_LINK_HIDDEN)
}

/// Construction-date fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeSection;

impl FieldGroup for AgeSection {
    fn title(&self) -> &str {
        "Age"
    }

    fn render(&self, ctx: &SectionContext<'_>) -> Vec<Node> {
        let building = ctx.building;
        let mut nodes = vec![
            Node::widget(
                ctx.mount(
                    "date_year",
                    WidgetKind::YearRange {
                        year: building.value("date_year").clone(),
                        upper: building.value("date_upper").clone(),
                        lower: building.value("date_lower").clone(),
                    },
                )
                .with_verification(ctx.verification("date_year")),
            ),
            Node::widget(
                ctx.mount(
                    "facade_year",
                    WidgetKind::Numeric {
                        value: building.value("facade_year").clone(),
                        min: 1,
                        max: ctx.clock.current_year(),
                        step: 1,
                    },
                )
                .with_verification(ctx.verification("facade_year")),
            ),
            Node::widget(ctx.mount(
                "date_source",
                WidgetKind::Select {
                    value: building.value("date_source").clone(),
                    options: ctx.options("date_source"),
                },
            )),
        ];

        if date_link_rule().is_visible(building) {
            nodes.push(Node::widget(
                ctx.mount(
                    "date_link",
                    WidgetKind::MultiEntry {
                        values: building.value("date_link").clone(),
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

        nodes
    }
}
