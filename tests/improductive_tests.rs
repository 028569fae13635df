use presencia::core::calculator::improductive::{
    ImproductiveKind, classify, is_improductive, known_articles,
};

#[test]
fn test_known_articles_are_improductive() {
    assert_eq!(classify("LIMPIEZA"), Some(ImproductiveKind::Cleaning));
    assert_eq!(classify("IMP-MANT"), Some(ImproductiveKind::Maintenance));
    assert_eq!(classify("REUNIÓN"), Some(ImproductiveKind::Meeting));
    assert_eq!(classify("PREPARACION MAQUINA"), Some(ImproductiveKind::Setup));
}

#[test]
fn test_lookup_ignores_case_and_padding() {
    assert!(is_improductive("  limpieza "));
    assert!(is_improductive("Averia"));
    assert!(is_improductive("avería"));
    assert_eq!(
        classify("formación").map(|k| k.label()),
        Some("training")
    );
}

#[test]
fn test_other_articles_are_productive() {
    assert!(!is_improductive("PIEZA-A"));
    assert!(!is_improductive(""));
    assert!(!is_improductive("LIMPIEZA X"));
}

#[test]
fn test_table_is_populated() {
    assert!(known_articles() >= 20);
}
