use serie_types::{NormalizeOptions, SerieConfig};

#[test]
fn serie_config_roundtrip() {
    let cfg = SerieConfig {
        normalize: NormalizeOptions {
            business_days_only: false,
            ..NormalizeOptions::default()
        },
        provider_timeout: std::time::Duration::from_millis(2500),
    };

    let json = serde_json::to_string(&cfg).expect("serialize serie config");
    let de: SerieConfig = serde_json::from_str(&json).expect("deserialize serie config");

    assert_eq!(de, cfg);
    assert_eq!(de.provider_timeout.as_millis(), 2500);
    assert!(!de.normalize.business_days_only);
}

#[test]
fn partial_json_fills_defaults() {
    let de: NormalizeOptions =
        serde_json::from_str(r#"{ "fuzzy_needles": ["last"] }"#).expect("deserialize options");

    assert_eq!(de.fuzzy_needles, vec!["last".to_string()]);
    assert_eq!(de.date_label, "date");
    assert_eq!(de.price_fallbacks.first().map(String::as_str), Some("Adj Close"));
    assert!(de.promote_index);
    assert!(de.business_days_only);
}

#[test]
fn default_fallback_order_is_stable() {
    let opts = NormalizeOptions::default();
    assert_eq!(
        opts.price_fallbacks,
        vec!["Adj Close", "Close", "close", "Adj_Close", "Price", "price", "AdjClose"]
    );
}
