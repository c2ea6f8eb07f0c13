use phf::{Set, phf_set};

/// Providers checked for one-edit typos, in priority order.
pub const MAJOR_PROVIDERS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "aol.com",
    "protonmail.com",
    "zoho.com",
    "yandex.com",
    "mail.com",
    "me.com",
    "live.com",
    "msn.com",
];

pub static DISPOSABLE_DOMAINS: Set<&'static str> = phf_set! {
    "tempmail.com",
    "throwawaymail.com",
    "mailinator.com",
    "guerrillamail.com",
    "yopmail.com",
    "10minutemail.com",
    "sharklasers.com",
    "getnada.com",
    "dispostable.com",
    "temp-mail.org",
    "maildrop.cc",
    "fakeinbox.com",
    "temp-mail.io",
    "emailondeck.com",
    "moakt.com",
};

pub static ROLE_ACCOUNTS: Set<&'static str> = phf_set! {
    "admin", "support", "info", "sales", "contact", "webmaster", "billing",
    "jobs", "noreply", "help", "marketing", "office", "team", "hello", "mail",
    "staff", "accounts", "orders", "shipping", "hr", "dev", "test", "tech",
};

/// Stored with the leading dot, as returned by `EmailAddress::tld`.
pub static HIGH_RISK_TLDS: Set<&'static str> = phf_set! {
    ".top", ".xyz", ".stream", ".win", ".biz", ".icu", ".buzz", ".casa",
    ".surf", ".zip", ".click",
};

pub fn is_disposable(domain: &str) -> bool {
    DISPOSABLE_DOMAINS.contains(domain)
}

pub fn is_role_account(local: &str) -> bool {
    ROLE_ACCOUNTS.contains(local)
}

pub fn is_high_risk_tld(tld: &str) -> bool {
    HIGH_RISK_TLDS.contains(tld)
}
