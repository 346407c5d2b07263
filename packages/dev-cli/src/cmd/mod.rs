//! Command implementations

pub mod feed;
pub mod publish;
pub mod seed;

use storefront_core::kernel::test_dependencies::TestDependencies;
use storefront_core::kernel::{AuthSubject, StorefrontDeps};

/// A fresh in-memory gateway with the dev subject signed in.
///
/// The store lives for this process only; each command seeds what it
/// needs and browses it in the same run.
pub fn dev_gateway() -> (TestDependencies, StorefrontDeps, AuthSubject) {
    let gateway = TestDependencies::new();
    let subject = gateway.identity.sign_in_as("dev@motoradverts.local");
    let deps = gateway.deps();
    (gateway, deps, subject)
}

/// Whole-pound GBP formatting for terminal tiles.
pub fn gbp(price: f64) -> String {
    let pounds = price.round() as i64;
    let digits = pounds.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if pounds < 0 {
        format!("-£{}", grouped)
    } else {
        format!("£{}", grouped)
    }
}
