use serde::{Deserialize, Serialize};

// icon keys
//
// catalog entries name their icon by key; deserializing into this enum is what rejects
// a key with no symbol, so a catalog that loads always renders
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum IconKey {
    Brain,
    Code,
    Cpu,
    Database,
    Eye,
    Globe,
    MessageSquare,
    Shield,
    Smartphone,
    Zap,
}

// key -> renderable symbol
const ICON_TABLE: &[(IconKey, &str)] = &[
    (IconKey::Brain, "🧠"),
    (IconKey::Code, "⌨"),
    (IconKey::Cpu, "🖥"),
    (IconKey::Database, "🗄"),
    (IconKey::Eye, "👁"),
    (IconKey::Globe, "🌐"),
    (IconKey::MessageSquare, "💬"),
    (IconKey::Shield, "🛡"),
    (IconKey::Smartphone, "📱"),
    (IconKey::Zap, "⚡"),
];

impl IconKey {
    pub const ALL: [IconKey; 10] = [
        IconKey::Brain,
        IconKey::Code,
        IconKey::Cpu,
        IconKey::Database,
        IconKey::Eye,
        IconKey::Globe,
        IconKey::MessageSquare,
        IconKey::Shield,
        IconKey::Smartphone,
        IconKey::Zap,
    ];

    pub fn symbol(self) -> &'static str {
        ICON_TABLE
            .iter()
            .find(|(key, _)| *key == self)
            .map(|(_, symbol)| *symbol)
            .unwrap_or("•")
    }
}
