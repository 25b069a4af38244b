use solace_core::AgeCategory::{Adolescent, Child, Infant, Neonate, Toddler};
use solace_core::{AgeCategory, EvidenceLevel, PainLevel};

use crate::{InterventionDefinition, InterventionId};

fn entry(
    id: InterventionId,
    name: &str,
    description: &str,
    evidence_level: EvidenceLevel,
    age_appropriate: &[AgeCategory],
    min_level: PainLevel,
) -> InterventionDefinition {
    InterventionDefinition {
        id,
        name: name.to_string(),
        description: description.to_string(),
        evidence_level,
        age_appropriate: age_appropriate.to_vec(),
        min_level,
    }
}

/// The catalog in its fixed tie-break order.
pub fn all_interventions() -> &'static [InterventionDefinition] {
    static CATALOG: std::sync::LazyLock<Vec<InterventionDefinition>> =
        std::sync::LazyLock::new(|| {
            use EvidenceLevel::{A, B, C};
            use InterventionId::*;
            use PainLevel::{Mild, Moderate, Severe};

            const ALL_AGES: &[AgeCategory] = &AgeCategory::ALL;

            vec![
                entry(
                    Sucrose,
                    "Oral sucrose",
                    "24% sucrose on the anterior tongue two minutes before the procedure",
                    A,
                    &[Neonate, Infant],
                    Mild,
                ),
                entry(
                    NonNutritiveSucking,
                    "Non-nutritive sucking",
                    "Pacifier offered during and after the painful stimulus",
                    A,
                    &[Neonate, Infant],
                    Mild,
                ),
                entry(
                    SkinToSkin,
                    "Skin-to-skin contact",
                    "Kangaroo care with a parent for at least ten minutes before and during the procedure",
                    A,
                    &[Neonate, Infant],
                    Mild,
                ),
                entry(
                    Breastfeeding,
                    "Breastfeeding",
                    "Established latch before and throughout the procedure",
                    A,
                    &[Neonate, Infant],
                    Mild,
                ),
                entry(
                    FacilitatedTucking,
                    "Facilitated tucking",
                    "Hands hold the infant's limbs flexed toward the trunk in a midline position",
                    A,
                    &[Neonate],
                    Mild,
                ),
                entry(
                    Swaddling,
                    "Swaddling",
                    "Snug wrapping with hands near the face",
                    B,
                    &[Neonate, Infant],
                    Mild,
                ),
                entry(
                    DistractionVisual,
                    "Visual distraction",
                    "Bubbles, light-up toys, books or videos held in the child's line of sight",
                    A,
                    &[Infant, Toddler, Child, Adolescent],
                    Mild,
                ),
                entry(
                    DistractionAudio,
                    "Music and audio distraction",
                    "Familiar songs, stories or music through speaker or headphones",
                    B,
                    &[Infant, Toddler, Child, Adolescent],
                    Mild,
                ),
                entry(
                    ParentalPresence,
                    "Parental presence",
                    "Caregiver at the bedside coached to comfort and hold",
                    B,
                    ALL_AGES,
                    Mild,
                ),
                entry(
                    ComfortPositioning,
                    "Comfort positioning",
                    "Upright, held or supported position instead of lying restrained",
                    B,
                    ALL_AGES,
                    Mild,
                ),
                entry(
                    BreathingExercises,
                    "Breathing exercises",
                    "Slow deep breathing, blowing bubbles or a pinwheel",
                    A,
                    &[Child, Adolescent],
                    Mild,
                ),
                entry(
                    GuidedImagery,
                    "Guided imagery",
                    "Clinician-led imagination of a favourite place or activity",
                    B,
                    &[Child, Adolescent],
                    Moderate,
                ),
                entry(
                    VirtualReality,
                    "Virtual reality",
                    "Immersive headset content during the procedure",
                    B,
                    &[Child, Adolescent],
                    Moderate,
                ),
                entry(
                    ColdTherapy,
                    "Cold therapy",
                    "Wrapped ice pack or vibrating cold device over the site",
                    C,
                    &[Toddler, Child, Adolescent],
                    Moderate,
                ),
                entry(
                    HeatTherapy,
                    "Heat therapy",
                    "Warm pack for muscular or abdominal pain, never over broken skin",
                    C,
                    &[Child, Adolescent],
                    Moderate,
                ),
                entry(
                    Massage,
                    "Massage",
                    "Gentle stroking or massage away from the painful site",
                    C,
                    &[Infant, Toddler, Child, Adolescent],
                    Moderate,
                ),
                entry(
                    CognitiveBehavioral,
                    "Cognitive-behavioral strategies",
                    "Coping statements, reframing and relaxation practice",
                    B,
                    &[Adolescent],
                    Severe,
                ),
                entry(
                    Hypnosis,
                    "Hypnosis",
                    "Trained clinician-led hypnotic suggestion",
                    B,
                    &[Child, Adolescent],
                    Severe,
                ),
            ]
        });
    &CATALOG
}

/// Look up an intervention by id.
pub fn definition(id: InterventionId) -> Option<&'static InterventionDefinition> {
    all_interventions().iter().find(|d| d.id == id)
}
