use ecotally_schemas::result::EmissionsBreakdown;

/// A category whose share of the total exceeds this emits its tips.
/// With three categories the largest share is always above a third, so any
/// non-zero total produces at least one recommendation.
const SHARE_THRESHOLD: f64 = 0.30;

/// Absolute per-category cutoffs, kg CO2e per year. Applied independently of
/// share so an objectively high input still draws advice when the other
/// categories dwarf it proportionally.
const TRANSPORT_KG_TRIGGER: f64 = 4000.0;
const DIET_KG_TRIGGER: f64 = 2000.0;
const ELECTRICITY_KG_TRIGGER: f64 = 3000.0;

/// Flight sub-total alone above this adds a flight-specific tip, roughly
/// 5000 flight miles at the built-in factor.
const FLIGHT_KG_TRIGGER: f64 = 1200.0;

const ZERO_FOOTPRINT_TIP: &str =
    "Great job! Your carbon footprint is relatively low. Keep maintaining your sustainable habits.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Transport,
    Diet,
    Electricity,
}

impl Category {
    fn kg(&self, breakdown: &EmissionsBreakdown) -> f64 {
        match self {
            Category::Transport => breakdown.transport,
            Category::Diet => breakdown.diet,
            Category::Electricity => breakdown.electricity,
        }
    }

    fn absolute_trigger(&self) -> f64 {
        match self {
            Category::Transport => TRANSPORT_KG_TRIGGER,
            Category::Diet => DIET_KG_TRIGGER,
            Category::Electricity => ELECTRICITY_KG_TRIGGER,
        }
    }

    fn tips(&self) -> &'static [&'static str] {
        match self {
            Category::Transport => &[
                "Transport: consider carpooling or switching to an EV to reduce driving emissions.",
                "Transport: try to replace one long-haul flight with a local vacation or train trip.",
            ],
            Category::Diet => &[
                "Diet: reducing meat consumption, even by one day a week, can significantly lower your footprint.",
            ],
            Category::Electricity => &[
                "Energy: switch to LED bulbs and unplug electronics when not in use.",
                "Energy: check whether your utility provider offers a green-energy option.",
            ],
        }
    }
}

/// Produces the ordered advice list for a breakdown. Categories are visited
/// in descending order of their contribution (ties keep the fixed
/// transport, diet, electricity order), so the biggest lever's tips come
/// first. Pure and deterministic; the breakdown is never mutated.
pub fn recommend(breakdown: &EmissionsBreakdown) -> Vec<String> {
    if breakdown.total == 0.0 {
        return vec![ZERO_FOOTPRINT_TIP.to_string()];
    }

    let mut ranked = [Category::Transport, Category::Diet, Category::Electricity];
    // Stable sort keeps the fixed order on equal contributions.
    ranked.sort_by(|a, b| {
        b.kg(breakdown)
            .partial_cmp(&a.kg(breakdown))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut recommendations = Vec::new();
    for category in ranked {
        let kg = category.kg(breakdown);
        let share = kg / breakdown.total;
        if share > SHARE_THRESHOLD || kg > category.absolute_trigger() {
            recommendations.extend(category.tips().iter().map(|tip| tip.to_string()));
        }
        if category == Category::Transport
            && breakdown.breakdown.transport.flight > FLIGHT_KG_TRIGGER
        {
            recommendations.push(
                "Flights: air travel dominates your transport footprint; fewer, longer trips or economy direct routes cut it fastest.".to_string(),
            );
        }
    }
    recommendations
}
