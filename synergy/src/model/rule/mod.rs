mod category_matcher;
mod synergy_rule;
mod synergy_rule_set;

pub use category_matcher::{CategoryMatcher, SubstringMatcher};
pub use synergy_rule::SynergyRule;
pub use synergy_rule_set::SynergyRuleSet;
