//! Static advice table keyed by silhouette category
//!
//! Each entry is pre-authored text: silhouette description, wardrobe
//! guidance, a weekly training program and dietary guidance. Text is data;
//! the classifier never builds or branches on it.

use crate::morphology::MorphologyType;

/// Advice entries, one per category
pub static ADVICE_TABLE: [(MorphologyType, &str); 5] = [
    (MorphologyType::InvertedTriangle, ADVICE_V),
    (MorphologyType::Triangle, ADVICE_A),
    (MorphologyType::Rectangle, ADVICE_H),
    (MorphologyType::Hourglass, ADVICE_X),
    (MorphologyType::Round, ADVICE_O),
];

/// Look up the advice text for a category
///
/// Empty when the table has no entry for the category.
pub fn advice_for(morphology: MorphologyType) -> &'static str {
    ADVICE_TABLE
        .iter()
        .find(|(t, _)| *t == morphology)
        .map(|(_, text)| *text)
        .unwrap_or_default()
}

const ADVICE_V: &str = "Votre silhouette présente des épaules plus larges que les hanches.

Conseils vestimentaires :
• Privilégiez les hauts simples et les décolletés en V
• Évitez les épaules marquées et les manches volumineuses
• Portez des pantalons droits ou légèrement évasés
• Ajoutez du volume en bas avec des jupes plissées ou des pantalons à pinces

Programme d'entraînement recommandé :
• Cardio : 3-4 fois par semaine
  - Course à pied ou vélo : 30-45 minutes
  - Natation : 45 minutes
  - Évitez les sports sollicitant beaucoup les épaules

• Renforcement musculaire :
  - Squats : 3 séries de 15 répétitions
  - Fentes : 3 séries de 12 répétitions par jambe
  - Soulevé de terre : 3 séries de 10 répétitions
  - Leg press : 3 séries de 12 répétitions
  - Extensions de hanches : 3 séries de 15 répétitions

• Étirements :
  - Étirements des épaules et du dos
  - Yoga ou Pilates 2 fois par semaine
  - Focus sur la mobilité des hanches

Conseils alimentaires :
• Privilégiez les protéines maigres (poulet, poisson, légumineuses)
• Consommez des glucides complexes (riz complet, quinoa, patates douces)
• Ajoutez des graisses saines (avocat, noix, huile d'olive)
• Mangez 5-6 petits repas par jour pour maintenir la masse musculaire
• Hydratez-vous bien (2-3L d'eau par jour)
• Limitez les sucres raffinés et l'alcool";

const ADVICE_A: &str = "Votre silhouette présente des hanches plus larges que les épaules.

Conseils vestimentaires :
• Mettez l'accent sur le haut du corps avec des détails
• Portez des hauts avec des manches volumineuses
• Choisissez des pantalons droits ou légèrement fuselés
• Évitez les jupes trop moulantes ou les pantalons à taille basse

Programme d'entraînement recommandé :
• Cardio : 4-5 fois par semaine
  - HIIT : 20-30 minutes
  - Course à pied : 30-45 minutes
  - Vélo elliptique : 45 minutes

• Renforcement musculaire :
  - Développé couché : 3 séries de 12 répétitions
  - Tirage vertical : 3 séries de 12 répétitions
  - Élévations latérales : 3 séries de 15 répétitions
  - Rowing : 3 séries de 12 répétitions
  - Pompes : 3 séries de 10-15 répétitions

• Étirements :
  - Étirements des hanches et des jambes
  - Yoga dynamique 2-3 fois par semaine
  - Focus sur la mobilité des épaules

Conseils alimentaires :
• Augmentez l'apport en protéines (1.6-2g par kg de poids)
• Réduisez les glucides simples (pain blanc, pâtes blanches)
• Consommez des fibres (légumes, fruits, céréales complètes)
• Mangez des graisses saines (poissons gras, noix)
• Évitez les aliments transformés et le sucre
• Buvez du thé vert pour stimuler le métabolisme";

const ADVICE_H: &str = "Votre silhouette présente des proportions équilibrées.

Conseils vestimentaires :
• Créez des courbes avec des ceintures et des détails
• Portez des vêtements structurés
• Ajoutez des détails au niveau de la taille
• Évitez les vêtements trop amples ou trop moulants

Programme d'entraînement recommandé :
• Cardio : 3-4 fois par semaine
  - Course à pied : 30-45 minutes
  - Natation : 45 minutes
  - HIIT : 20-30 minutes

• Renforcement musculaire :
  - Crunchs : 3 séries de 20 répétitions
  - Planche : 3 séries de 30 secondes
  - Squats : 3 séries de 15 répétitions
  - Développé couché : 3 séries de 12 répétitions
  - Soulevé de terre : 3 séries de 10 répétitions

• Étirements :
  - Yoga ou Pilates 2-3 fois par semaine
  - Étirements complets du corps
  - Focus sur la posture

Conseils alimentaires :
• Maintenez un équilibre protéines/glucides/graisses (30/40/30)
• Consommez des aliments riches en fibres
• Mangez des protéines à chaque repas
• Privilégiez les aliments à index glycémique bas
• Hydratez-vous régulièrement
• Évitez les grignotages entre les repas";

const ADVICE_X: &str = "Votre silhouette présente une taille bien marquée.

Conseils vestimentaires :
• Mettez en valeur votre taille avec des ceintures
• Portez des vêtements cintrés à la taille
• Choisissez des robes et tops ajustés
• Évitez les vêtements trop amples ou sans forme

Programme d'entraînement recommandé :
• Cardio : 3-4 fois par semaine
  - Danse : 45-60 minutes
  - Natation : 45 minutes
  - Course à pied : 30 minutes

• Renforcement musculaire :
  - Crunchs obliques : 3 séries de 15 répétitions
  - Planche latérale : 3 séries de 30 secondes
  - Squats : 3 séries de 12 répétitions
  - Fentes : 3 séries de 10 répétitions par jambe
  - Élévations de hanches : 3 séries de 15 répétitions

• Étirements :
  - Yoga ou Pilates 2-3 fois par semaine
  - Étirements de la taille et du dos
  - Focus sur la mobilité du bassin

Conseils alimentaires :
• Maintenez un apport équilibré en macronutriments
• Consommez des protéines maigres
• Privilégiez les glucides complexes
• Mangez des graisses saines en quantité modérée
• Buvez beaucoup d'eau (2-3L par jour)
• Évitez les aliments transformés et le sucre";

const ADVICE_O: &str = "Votre silhouette présente des courbes douces.

Conseils vestimentaires :
• Créez des lignes verticales avec les vêtements
• Portez des vêtements structurés
• Choisissez des matières fluides
• Évitez les vêtements trop moulants

Programme d'entraînement recommandé :
• Cardio : 4-5 fois par semaine
  - Marche rapide : 45-60 minutes
  - Natation : 45 minutes
  - Vélo : 30-45 minutes
  - HIIT : 20-30 minutes

• Renforcement musculaire :
  - Squats : 3 séries de 15 répétitions
  - Fentes : 3 séries de 12 répétitions par jambe
  - Planche : 3 séries de 30 secondes
  - Pompes : 3 séries de 10 répétitions
  - Rowing : 3 séries de 12 répétitions

• Étirements :
  - Yoga doux 2-3 fois par semaine
  - Étirements complets du corps
  - Focus sur la respiration et la posture

Conseils alimentaires :
• Réduisez l'apport en glucides simples
• Augmentez la consommation de protéines maigres
• Mangez beaucoup de légumes et fruits
• Évitez les graisses saturées et le sucre
• Buvez de l'eau avant chaque repas
• Mangez lentement et mastiquez bien";
