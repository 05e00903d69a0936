// Scénarios de bout en bout : propriétés algébriques des ensembles
// neutrosophiques et transport le long d'une fonction.

use rstest::rstest;
use svns::{Mapping, NeutrosophicSet, NsError, Triple, Universe};

type Degrees = (f64, f64, f64);

fn abcde() -> Universe {
    Universe::from_delimited_text("a,b,c,d,e").unwrap()
}

fn on_abc(triples: [Degrees; 3]) -> NeutrosophicSet {
    let u = Universe::from_labels(["a", "b", "c"]).unwrap();
    NeutrosophicSet::with_triples(&u, triples).unwrap()
}

const A: [Degrees; 3] = [(0.7, 0.25, 0.1), (0.4, 0.5, 0.9), (0.0, 0.0, 1.0)];
const B: [Degrees; 3] = [(0.2, 0.75, 0.5), (0.9, 0.25, 0.0), (0.5, 0.5, 0.5)];
const DECIMAL: [Degrees; 3] = [(0.7, 0.3, 0.1), (0.4, 0.6, 0.9), (0.1, 0.1, 0.1)];
const EMPTY: [Degrees; 3] = [(0.0, 0.0, 1.0); 3];
const ABSOLUTE: [Degrees; 3] = [(1.0, 1.0, 0.0); 3];

#[test]
fn universe_equality_is_ordered_and_reflexive() {
    let u = Universe::from_labels(["a", "b", "c"]).unwrap();
    let reordered = Universe::from_labels(["b", "a", "c"]).unwrap();
    assert!(u.equals(&u));
    assert!(!u.equals(&reordered));
    assert!(matches!(
        Universe::from_labels(["a", "b", "b"]),
        Err(NsError::DuplicateElement { .. })
    ));
}

#[rstest]
#[case(A, B)]
#[case(B, A)]
#[case(A, EMPTY)]
#[case(B, ABSOLUTE)]
#[case(A, A)]
#[case(DECIMAL, A)]
#[case(DECIMAL, DECIMAL)]
#[case(B, DECIMAL)]
fn set_algebra_laws(#[case] a: [Degrees; 3], #[case] b: [Degrees; 3]) {
    let a = on_abc(a);
    let b = on_abc(b);

    // commutativité
    assert!(a.union(&b).unwrap().equals(&b.union(&a).unwrap()).unwrap());
    assert!(a
        .intersection(&b)
        .unwrap()
        .equals(&b.intersection(&a).unwrap())
        .unwrap());

    // involution du complément
    assert!(a.complement().complement().equals(&a).unwrap());

    // deux écritures de la différence
    assert!(a
        .difference(&b)
        .unwrap()
        .equals(&a.intersection(&b.complement()).unwrap())
        .unwrap());

    // réflexivité et antisymétrie de l'inclusion
    assert!(a.is_subset(&a).unwrap());
    if a.is_subset(&b).unwrap() && b.is_subset(&a).unwrap() {
        assert!(a.equals(&b).unwrap());
    }

    // disjonction ⟺ intersection vide
    let empty = NeutrosophicSet::new(a.universe());
    assert_eq!(
        a.is_disjoint(&b).unwrap(),
        a.intersection(&b).unwrap().equals(&empty).unwrap()
    );
}

#[test]
fn set_and_its_complement_can_overlap() {
    // σ = 0.5 : l'indétermination se recouvre avec celle du complément
    let a = on_abc([(0.5, 0.5, 0.5), (0.0, 0.0, 1.0), (0.0, 0.0, 1.0)]);
    let meet = a.intersection(&a.complement()).unwrap();
    assert_eq!(meet.get_element("a").unwrap().as_tuple(), (0.5, 0.5, 0.5));
    assert!(!a.is_disjoint(&a.complement()).unwrap());
}

#[test]
fn out_of_range_triple_leaves_set_untouched() {
    let mut a = on_abc(A);
    let before = a.clone();
    for label in ["a", "b", "c"] {
        let err = a.set_element(label, (1.5, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, NsError::DegreeRange { .. }));
    }
    assert!(a.equals(&before).unwrap());
}

#[test]
fn fibres_of_small_mapping() {
    let x = Universe::from_labels(["a", "b", "c"]).unwrap();
    let y = Universe::from_labels([1, 2]).unwrap();
    let f = Mapping::new(&x, &y, [2, 1, 2]).unwrap();
    assert_eq!(f.fibre("2").unwrap(), vec!["a", "c"]);
    assert_eq!(f.fibre("1").unwrap(), vec!["b"]);
}

#[test]
fn image_of_unused_codomain_element_is_absolute() {
    let y = Universe::from_labels([1, 2, 3, 4, 5]).unwrap();
    let f = Mapping::new(&abcde(), &y, [1, 3, 1, 2, 1]).unwrap();
    assert!(f.fibre("5").unwrap().is_empty());

    let s = NeutrosophicSet::from_text(
        &abcde(),
        "(0.7,0.3,0.1), (0.4,0.6,0.9), (0,0,1), (0.1,0.4,0.5), (0.2,0.2,0.3)",
    )
    .unwrap();
    let image = f.image(&s).unwrap();
    assert_eq!(image.get_element("5").unwrap(), Triple::ABSOLUTE);
    assert_eq!(image.get_element("5").unwrap().as_tuple(), (1.0, 1.0, 0.0));
}

#[test]
fn set_is_contained_in_counterimage_of_its_image() {
    let y = Universe::from_labels([1, 2, 3, 4]).unwrap();
    let f = Mapping::new(&abcde(), &y, [1, 3, 1, 2, 1]).unwrap();

    let mut a = NeutrosophicSet::new(&abcde());
    a.set_element("a", (0.7, 0.3, 0.1)).unwrap();
    a.set_element("b", (0.4, 0.6, 0.9)).unwrap();
    a.set_element("c", (0.0, 0.0, 1.0)).unwrap();
    a.set_element("d", (0.1, 0.4, 0.5)).unwrap();
    a.set_element("e", (0.2, 0.2, 0.3)).unwrap();

    let back = f.counterimage(&f.image(&a).unwrap()).unwrap();
    assert!(a.is_subset(&back).unwrap());
    // a, c, e partagent la fibre de 1
    assert_eq!(back.get_element("c").unwrap().as_tuple(), (0.7, 0.3, 0.1));
    assert_eq!(back.get_element("e").unwrap(), back.get_element("a").unwrap());
}

#[test]
fn mapping_built_three_ways_agree() {
    let y = Universe::from_labels([1, 2, 3, 4]).unwrap();
    let positional = Mapping::new(&abcde(), &y, [1, 3, 1, 2, 1]).unwrap();
    let textual = Mapping::from_text(&abcde(), &y, "1 3 1 2 1").unwrap();
    let associated = Mapping::with_association(
        &abcde(),
        &y,
        [("e", 1), ("d", 2), ("c", 1), ("b", 3), ("a", 1)],
    )
    .unwrap();
    assert!(positional.equals(&textual));
    assert!(positional.equals(&associated));

    // codomaine inféré : { 1, 3, 2 } ≠ { 1, 2, 3, 4 }
    let inferred = Mapping::from_association_text("a->1, b->3, c->1, d->2, e->1").unwrap();
    assert!(!positional.equals(&inferred));
}
