use mia_models::registry::{self, ModelKind};

#[test]
fn test_lookup_is_case_insensitive() {
    let lower = registry::get("cnn").unwrap();
    let upper = registry::get("CNN").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower, ModelKind::Cnn);

    assert_eq!(registry::get("AlexNet").unwrap(), ModelKind::Alexnet);
    assert_eq!(registry::get("MLLEAKS_MLP").unwrap(), ModelKind::MlleaksMlp);
}

#[test]
fn test_every_key_resolves_to_its_kind() {
    for kind in ModelKind::ALL {
        assert_eq!(registry::get(kind.name()).unwrap(), kind);
    }
}

#[test]
fn test_unknown_name_lists_valid_keys() {
    let err = registry::get("resnet").unwrap_err();
    let message = err.to_string();

    assert!(message.contains("resnet"), "message was: {message}");
    for kind in ModelKind::ALL {
        assert!(
            message.contains(kind.name()),
            "missing key {} in: {message}",
            kind.name()
        );
    }
}

#[test]
fn test_from_str_delegates_to_lookup() {
    let kind: ModelKind = "Tiny_CNN".parse().unwrap();
    assert_eq!(kind, ModelKind::TinyCnn);
    assert!("vgg16".parse::<ModelKind>().is_err());
}

#[test]
fn test_wire_names_round_trip() {
    for kind in ModelKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.name()));
        let back: ModelKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn test_default_params_match_published_definitions() {
    let alexnet = ModelKind::Alexnet.default_params();
    assert_eq!(
        (alexnet.n_in, alexnet.n_classes, alexnet.n_filters, alexnet.size),
        (3, 10, 64, 32)
    );

    let tiny = ModelKind::TinyCnn.default_params();
    assert_eq!(tiny.size, 64);

    let attack = ModelKind::MlleaksMlp.default_params();
    assert_eq!(attack.n_classes, 1);
}
