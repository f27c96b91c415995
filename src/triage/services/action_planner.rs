use indexmap::IndexSet;

use crate::triage::types::{
    ActionPlan, Category, DebrisRisk, FireRisk, FloodSeverity, FusedResult, Priority, Visibility,
};

pub const MAX_IMMEDIATE: usize = 5;
pub const MAX_NOT_TO_DO: usize = 4;
pub const MAX_CHECKLIST: usize = 5;

const DEFAULT_CHECKLIST: [&str; 4] = ["Flashlight", "Batteries", "First Aid Kit", "Water"];

/// Scene signals the planner branches on. Absent image reads as a calm daylight scene.
struct Hazards<'a> {
    text: String,
    category: Category,
    priority: Priority,
    flood_severity: FloodSeverity,
    visibility: Visibility,
    fire_risk: FireRisk,
    debris_risk: DebrisRisk,
    risk_flags: Vec<&'a str>,
}

impl<'a> Hazards<'a> {
    fn new(fused: &'a FusedResult, raw_text: &str) -> Self {
        let image = fused.image_result.as_ref();
        Self {
            text: raw_text.to_lowercase(),
            category: fused.final_category,
            priority: fused.final_priority,
            flood_severity: image.map_or(FloodSeverity::Low, |i| i.flood_severity),
            visibility: image.map_or(Visibility::Daylight, |i| i.visibility),
            fire_risk: image.map_or(FireRisk::None, |i| i.fire_risk),
            debris_risk: image.map_or(DebrisRisk::Low, |i| i.debris_risk),
            risk_flags: fused.risk_flags.iter().map(String::as_str).collect(),
        }
    }

    fn mentions(&self, term: &str) -> bool {
        self.text.contains(term)
    }

    fn fire(&self) -> bool {
        self.mentions("fire") || self.fire_risk == FireRisk::Detected
    }

    fn flood(&self) -> bool {
        self.mentions("flood")
            || self.mentions("rising")
            || matches!(
                self.flood_severity,
                FloodSeverity::Severe | FloodSeverity::Moderate
            )
    }

    fn medical(&self) -> bool {
        self.category == Category::Medical || self.mentions("bleeding")
    }

    fn debris(&self) -> bool {
        self.debris_risk == DebrisRisk::High || self.mentions("trapped") || self.mentions("rubble")
    }
}

#[derive(Default)]
struct PlanBuilder {
    immediate: IndexSet<String>,
    not_to_do: IndexSet<String>,
    checklist: IndexSet<String>,
}

impl PlanBuilder {
    fn act(&mut self, items: &[&str]) {
        self.immediate.extend(items.iter().map(|s| s.to_string()));
    }

    fn avoid(&mut self, items: &[&str]) {
        self.not_to_do.extend(items.iter().map(|s| s.to_string()));
    }

    fn pack(&mut self, items: &[&str]) {
        self.checklist.extend(items.iter().map(|s| s.to_string()));
    }

    fn build(self) -> ActionPlan {
        ActionPlan {
            immediate: self.immediate.into_iter().take(MAX_IMMEDIATE).collect(),
            not_to_do: self.not_to_do.into_iter().take(MAX_NOT_TO_DO).collect(),
            checklist: self.checklist.into_iter().take(MAX_CHECKLIST).collect(),
        }
    }
}

/// Rule cascade turning a fused triage result into concrete instructions.
#[derive(Debug, Clone, Default)]
pub struct ActionPlanner;

impl ActionPlanner {
    pub fn new() -> Self {
        Self
    }

    pub fn plan(&self, fused: &FusedResult, raw_text: &str) -> ActionPlan {
        let hazards = Hazards::new(fused, raw_text);
        let mut plan = PlanBuilder::default();

        // Primary hazard: first match wins.
        if hazards.fire() {
            plan.act(&[
                "EVACUATE area immediately if safe paths exist.",
                "Stay low to ground (crawl) to avoid smoke inhalation.",
                "Check doors for heat before opening.",
            ]);
            plan.avoid(&["Do NOT use elevators.", "Do NOT re-enter a burning building."]);
            plan.pack(&["Wet cloth (for breathing)", "Flashlight"]);
        } else if hazards.flood() {
            plan.act(&[
                "Move to highest floor or roof immediately.",
                "Disconnect gas and electricity mains if dry to do so.",
            ]);
            plan.avoid(&[
                "Do NOT walk/drive through flood water (6 inches can knock you down).",
                "Do NOT touch electrical equipment if wet.",
            ]);
            plan.pack(&[
                "Floatation devices",
                "Waterproof bags for electronics",
                "Whistle",
            ]);
        } else if hazards.medical() {
            plan.act(&[
                "Control bleeding with direct pressure.",
                "Keep patient warm to prevent shock.",
            ]);
            plan.avoid(&[
                "Do NOT remove objects impaled in wounds (stabilize them instead).",
                "Do NOT give food/water to unconscious persons.",
            ]);
            plan.pack(&["Clean bandages", "Antiseptic", "Thermal blanket"]);
        } else if hazards.debris() {
            plan.act(&[
                "Protect head/neck with arms or pillows.",
                "Signal presence with tapping (3 taps) or whistle.",
            ]);
            plan.avoid(&[
                "Do NOT light matches (gas leak risk).",
                "Do NOT shout continuously (conserves oxygen/dust inhalation).",
            ]);
        }

        if hazards.visibility == Visibility::LowVisibility {
            plan.act(&["Use flashlight or phone light sparingly."]);
            plan.avoid(&["Do NOT move blindly in dark debris-filled areas."]);
        }

        if !hazards.risk_flags.is_empty() {
            let notice = format!(
                "Prioritize assistance for: {}.",
                hazards.risk_flags.join(", ")
            );
            plan.act(&[notice.as_str()]);
        }

        if hazards.category == Category::Logistics && hazards.priority != Priority::High {
            plan.act(&[
                "Secure drinking water source.",
                "Inventory food and warm clothing.",
            ]);
            plan.pack(&["Water (1 gallon/person)", "Canned food", "Can opener"]);
        }

        if plan.immediate.is_empty() {
            plan.act(&[
                "Stay calm and assess immediate surroundings.",
                "Listen to battery-operated radio for news.",
            ]);
        }
        if plan.not_to_do.is_empty() {
            plan.avoid(&["Do NOT rely on rumors."]);
        }
        if plan.checklist.is_empty() {
            plan.pack(&DEFAULT_CHECKLIST);
        }

        plan.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::services::{fusion::fuse, TextAnalyzer};
    use crate::triage::types::ImageResult;

    fn plan_for(text: &str, image: Option<ImageResult>) -> ActionPlan {
        let fused = fuse(TextAnalyzer::new().analyze(text), image);
        ActionPlanner::new().plan(&fused, text)
    }

    fn scene(visibility: Visibility, flood: FloodSeverity, debris: DebrisRisk) -> ImageResult {
        ImageResult {
            water_coverage: 0.0,
            flood_severity: flood,
            image_priority: Priority::Low,
            visibility,
            fire_risk: FireRisk::None,
            debris_risk: debris,
            brightness: 0.0,
            fire_ratio: 0.0,
            edge_density: 0.0,
        }
    }

    #[test]
    fn test_fire_branch() {
        let plan = plan_for("Fire on the second floor", None);
        assert_eq!(plan.immediate.len(), 3);
        assert_eq!(plan.immediate[0], "EVACUATE area immediately if safe paths exist.");
        assert_eq!(
            plan.not_to_do,
            vec!["Do NOT use elevators.", "Do NOT re-enter a burning building."]
        );
        assert_eq!(plan.checklist, vec!["Wet cloth (for breathing)", "Flashlight"]);
    }

    #[test]
    fn test_fire_wins_over_flood() {
        let plan = plan_for("flood water rising and a fire started", None);
        assert!(plan.immediate[0].starts_with("EVACUATE"));
        assert!(!plan.checklist.contains(&"Whistle".to_string()));
    }

    #[test]
    fn test_flood_branch_from_image() {
        let image = scene(Visibility::Daylight, FloodSeverity::Moderate, DebrisRisk::Low);
        let plan = plan_for("", Some(image));
        assert_eq!(plan.immediate[0], "Move to highest floor or roof immediately.");
        assert_eq!(plan.checklist.len(), 3);
    }

    #[test]
    fn test_medical_branch() {
        let plan = plan_for("he is bleeding badly", None);
        assert_eq!(
            plan.immediate,
            vec![
                "Control bleeding with direct pressure.",
                "Keep patient warm to prevent shock."
            ]
        );
        assert_eq!(
            plan.checklist,
            vec!["Clean bandages", "Antiseptic", "Thermal blanket"]
        );
    }

    #[test]
    fn test_debris_branch_falls_back_to_default_checklist() {
        let plan = plan_for("stuck under rubble", None);
        assert_eq!(plan.immediate[0], "Protect head/neck with arms or pillows.");
        assert_eq!(plan.not_to_do.len(), 2);
        assert_eq!(plan.checklist, DEFAULT_CHECKLIST.to_vec());
    }

    #[test]
    fn test_debris_branch_from_image() {
        let image = scene(Visibility::Daylight, FloodSeverity::Low, DebrisRisk::High);
        let plan = plan_for("", Some(image));
        assert_eq!(plan.immediate[1], "Signal presence with tapping (3 taps) or whistle.");
    }

    #[test]
    fn test_low_visibility_and_risk_flags() {
        let image = scene(Visibility::LowVisibility, FloodSeverity::Low, DebrisRisk::Low);
        let plan = plan_for("my grandmother is elderly and diabetic", Some(image));
        assert_eq!(
            plan.immediate,
            vec![
                "Use flashlight or phone light sparingly.",
                "Prioritize assistance for: elderly, diabetic.",
            ]
        );
        assert_eq!(
            plan.not_to_do,
            vec!["Do NOT move blindly in dark debris-filled areas."]
        );
    }

    #[test]
    fn test_logistics_actions() {
        let plan = plan_for("we are hungry and thirsty", None);
        assert_eq!(
            plan.immediate,
            vec![
                "Secure drinking water source.",
                "Inventory food and warm clothing."
            ]
        );
        assert_eq!(
            plan.checklist,
            vec!["Water (1 gallon/person)", "Canned food", "Can opener"]
        );
        assert_eq!(plan.not_to_do, vec!["Do NOT rely on rumors."]);
    }

    #[test]
    fn test_generic_fallback() {
        let plan = plan_for("", None);
        assert_eq!(
            plan.immediate,
            vec![
                "Stay calm and assess immediate surroundings.",
                "Listen to battery-operated radio for news."
            ]
        );
        assert_eq!(plan.not_to_do, vec!["Do NOT rely on rumors."]);
        assert_eq!(plan.checklist, DEFAULT_CHECKLIST.to_vec());
    }

    #[test]
    fn test_lists_are_truncated() {
        // "campfire" is not a whole-word fire keyword, but the plan checks substrings.
        let image = scene(Visibility::LowVisibility, FloodSeverity::Low, DebrisRisk::Low);
        let plan = plan_for("campfire smoke everywhere, need food", Some(image));

        assert_eq!(plan.immediate.len(), MAX_IMMEDIATE);
        assert_eq!(plan.immediate[3], "Use flashlight or phone light sparingly.");
        assert_eq!(plan.immediate[4], "Secure drinking water source.");
        assert_eq!(plan.not_to_do.len(), 3);
        assert_eq!(
            plan.checklist,
            vec![
                "Wet cloth (for breathing)",
                "Flashlight",
                "Water (1 gallon/person)",
                "Canned food",
                "Can opener"
            ]
        );
    }
}
