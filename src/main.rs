// =============================================================================
// SVNS — Point d'entrée : démonstration de l'algèbre neutrosophique
// =============================================================================
//
// Ce main.rs montre un parcours complet :
//   1. Définir un univers
//   2. Construire des ensembles neutrosophiques
//   3. Les combiner (∪, ∩, complément, différence)
//   4. Définir une fonction entre deux univers, ses fibres
//   5. Transporter un ensemble : image puis contre-image
//
// Journalisation : RUST_LOG=debug pour voir les traces du cœur.
// Affichage : SVNS_CONFIG=/chemin/config.json pour régler les tableaux.
//
// =============================================================================

use svns::{
    InlineRenderer, Mapping, NeutrosophicSet, NsConfig, NsResult, Renderer, TableRenderer,
    Universe,
};
use tracing_subscriber::EnvFilter;

fn main() -> NsResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = NsConfig::load()?;
    let table = TableRenderer::new(config.display.clone());
    let inline = InlineRenderer::new();
    tracing::info!(renderer = table.name(), "configuration loaded");

    println!("╔══════════════════════════════════════════════════╗");
    println!("║      SVNS — Ensembles neutrosophiques            ║");
    println!("║      Univers, opérations, images                 ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 1 : L'univers
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 1 : Univers ═══\n");

    let u = Universe::from_labels([1, 2, 3])?;
    println!("U = {}  (cardinalité {})\n", inline.render_universe(&u), u.cardinality());

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 2 : Deux ensembles neutrosophiques
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 2 : Ensembles neutrosophiques sur U ═══\n");

    let mut a = NeutrosophicSet::new(&u);
    a.set_element("1", (0.4, 0.3, 0.4))?;
    a.set_element("2", (0.2, 0.2, 1.0))?;
    a.set_element_text("3", "(0.1; 0.1, 0.9)")?;

    let b = NeutrosophicSet::from_text(&u, "(0.7,0.3,0.1), (0.4,0.6,0.8); (0.2,0.2,0.9)")?;

    println!("A =\n{}", table.render_set(&a));
    println!("B =\n{}", table.render_set(&b));

    match a.set_element("1", (1.5, 0.0, 0.0)) {
        Ok(()) => println!("✗ degré hors de [0,1] accepté\n"),
        Err(e) => println!("✓ rejeté : {}\n", e),
    }

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 3 : Opérations
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 3 : Opérations ═══\n");

    println!("A ∪ B  = {}", inline.render_set(&a.union(&b)?));
    println!("A ∩ B  = {}", inline.render_set(&a.intersection(&b)?));
    println!("A^c    = {}", inline.render_set(&a.complement()));
    println!("A \\ B  = {}", inline.render_set(&a.difference(&b)?));
    println!("A ⊆ B  : {}", a.is_subset(&b)?);
    println!("A ⊇ B  : {}", a.is_superset(&b)?);
    println!("A ∩ B = ∅ : {}", a.is_disjoint(&b)?);
    println!("A ∩ A^c = ∅ : {}\n", a.is_disjoint(&a.complement())?);

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 4 : Une fonction et ses fibres
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 4 : Fonction f : X → Y ═══\n");

    let x = Universe::from_delimited_text("a, b, c, d, e")?;
    let y = Universe::from_labels([1, 2, 3, 4])?;
    let f = Mapping::from_text(&x, &y, "(1,3,1,2,1)")?;

    println!("{}", table.render_mapping(&f));
    for v in &y {
        println!("fibre de {} = {:?}", v, f.fibre(v)?);
    }
    println!();

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 5 : Image et contre-image
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 5 : Image et contre-image ═══\n");

    let s = NeutrosophicSet::from_text(
        &x,
        "(0.7,0.3,0.1), (0.4,0.6,0.9), (0,0,1), (0.1,0.4,0.5), (0.2,0.2,0.3)",
    )?;
    let image = f.image(&s)?;
    let back = f.counterimage(&image)?;

    println!("S =\n{}", table.render_set(&s));
    println!("f(S) =\n{}", table.render_set(&image));
    println!("f⁻¹(f(S)) =\n{}", table.render_set(&back));

    if s.is_subset(&back)? {
        println!("✓ S ⊆ f⁻¹(f(S))");
    } else {
        println!("✗ S ⊄ f⁻¹(f(S))");
    }

    println!("\n═══════════════════════════════════════════════════");
    println!("  {} éléments dans X, {} dans Y", x.cardinality(), y.cardinality());
    println!("  fibre vide de 4 → triplet absolu {}", image.get_element("4")?);
    println!("═══════════════════════════════════════════════════");

    Ok(())
}
