//! Report records compiled into the binary

/// `(source name, JSON)` pairs in listing order
pub const BUILTIN_SOURCES: &[(&str, &str)] = &[
    ("zyn.json", include_str!("../../data/brands/zyn.json")),
    ("espolon.json", include_str!("../../data/brands/espolon.json")),
    ("cava.json", include_str!("../../data/brands/cava.json")),
    ("geico.json", include_str!("../../data/brands/geico.json")),
    ("ripple.json", include_str!("../../data/brands/ripple.json")),
    (
        "adobe-creative-cloud.json",
        include_str!("../../data/brands/adobe-creative-cloud.json"),
    ),
    (
        "hogwarts-legacy.json",
        include_str!("../../data/brands/hogwarts-legacy.json"),
    ),
    (
        "survodutide.json",
        include_str!("../../data/brands/survodutide.json"),
    ),
];
