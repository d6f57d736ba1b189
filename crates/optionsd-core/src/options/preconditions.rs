//! Precondition rules gating feature toggles
//!
//! Turning a feature on is refused while the settings it depends on are still
//! blank. The rules are plain data: adding one is a new table row.

use crate::prelude::*;

use super::service::OptionSnapshot;

/// The value that turns a boolean option on
pub const ENABLING_LITERAL: &str = "true";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreconditionRule {
	/// Option this rule guards
	pub key: &'static str,
	/// Options that must be non-blank before `key` may be enabled
	pub requires: &'static [&'static str],
	/// Shown to the client on rejection
	pub message: &'static str,
}

impl PreconditionRule {
	/// Keys from `requires` that are blank or missing in the snapshot
	pub fn missing(&self, snapshot: &OptionSnapshot) -> Vec<&'static str> {
		self.requires
			.iter()
			.copied()
			.filter(|key| snapshot.get(key).is_none_or(super::OptionValue::is_blank))
			.collect()
	}

	pub fn check(&self, snapshot: &OptionSnapshot) -> ClResult<()> {
		let missing = self.missing(snapshot);
		if missing.is_empty() {
			Ok(())
		} else {
			debug!("Precondition for {} failed, missing: {:?}", self.key, missing);
			Err(Error::Rejected(self.message.to_string()))
		}
	}
}

pub static PRECONDITION_RULES: &[PreconditionRule] = &[
	PreconditionRule {
		key: "TelegramOAuthEnabled",
		requires: &["TelegramBotToken"],
		message: "Cannot enable Telegram OAuth: set the Telegram bot token and bot name first",
	},
	PreconditionRule {
		key: "EmailVerificationEnabled",
		requires: &["SMTPServer", "SMTPAccount", "SMTPFrom", "SMTPToken"],
		message: "Cannot enable email verification: complete the SMTP configuration first",
	},
	PreconditionRule {
		key: "GitHubOAuthEnabled",
		requires: &["GitHubClientId", "GitHubClientSecret"],
		message: "Cannot enable GitHub OAuth: set the GitHub client id and client secret first",
	},
	PreconditionRule {
		key: "EmailDomainRestrictionEnabled",
		requires: &["EmailDomainWhitelist"],
		message: "Cannot enable email domain restriction: add at least one allowed email domain first",
	},
	PreconditionRule {
		key: "WeChatAuthEnabled",
		requires: &["WeChatServerAddress", "WeChatServerToken"],
		message: "Cannot enable WeChat login: set the WeChat server address and access token first",
	},
	PreconditionRule {
		key: "TurnstileCheckEnabled",
		requires: &["TurnstileSiteKey", "TurnstileSecretKey"],
		message: "Cannot enable Turnstile check: set the Turnstile site key and secret key first",
	},
	PreconditionRule {
		key: "LinuxDoOAuthEnabled",
		requires: &["LinuxDoClientId", "LinuxDoClientSecret"],
		message: "Cannot enable LinuxDo OAuth: set the LinuxDo client id and client secret first",
	},
];

pub fn rule_for(key: &str) -> Option<&'static PreconditionRule> {
	PRECONDITION_RULES.iter().find(|rule| rule.key == key)
}

/// Check a proposed update against the rule table
///
/// Only enabling transitions are gated. Any other value, and any key without a
/// rule, passes unconditionally.
pub fn check(key: &str, value: &str, snapshot: &OptionSnapshot) -> ClResult<()> {
	if value != ENABLING_LITERAL {
		return Ok(());
	}
	match rule_for(key) {
		Some(rule) => rule.check(snapshot),
		None => Ok(()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::options::OptionValue;

	fn snapshot(entries: &[(&str, OptionValue)]) -> OptionSnapshot {
		entries.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect()
	}

	fn s(v: &str) -> OptionValue {
		OptionValue::String(v.to_string())
	}

	#[test]
	fn test_rule_keys_are_unique() {
		for (i, rule) in PRECONDITION_RULES.iter().enumerate() {
			assert!(
				PRECONDITION_RULES[i + 1..].iter().all(|other| other.key != rule.key),
				"duplicate rule for {}",
				rule.key
			);
			assert!(!rule.requires.is_empty());
		}
	}

	#[test]
	fn test_telegram_requires_token() {
		let empty = snapshot(&[("TelegramBotToken", s(""))]);
		assert!(matches!(check("TelegramOAuthEnabled", "true", &empty), Err(Error::Rejected(_))));

		let configured = snapshot(&[("TelegramBotToken", s("123:abc"))]);
		assert!(check("TelegramOAuthEnabled", "true", &configured).is_ok());
	}

	#[test]
	fn test_missing_key_counts_as_blank() {
		let empty = OptionSnapshot::default();
		assert!(check("GitHubOAuthEnabled", "true", &empty).is_err());
	}

	#[test]
	fn test_email_verification_requires_each_smtp_field() {
		let full = [
			("SMTPServer", s("smtp.example.com")),
			("SMTPAccount", s("noreply")),
			("SMTPFrom", s("noreply@example.com")),
			("SMTPToken", s("secret")),
		];
		assert!(check("EmailVerificationEnabled", "true", &snapshot(&full)).is_ok());

		for i in 0..full.len() {
			let mut partial = full.clone();
			partial[i].1 = s("");
			let res = check("EmailVerificationEnabled", "true", &snapshot(&partial));
			assert!(matches!(res, Err(Error::Rejected(_))), "{} blank should reject", partial[i].0);
		}
	}

	#[test]
	fn test_domain_restriction_requires_whitelist() {
		let empty = snapshot(&[("EmailDomainWhitelist", OptionValue::StringList(vec![]))]);
		assert!(check("EmailDomainRestrictionEnabled", "true", &empty).is_err());

		let listed =
			snapshot(&[("EmailDomainWhitelist", OptionValue::StringList(vec!["gmail.com".into()]))]);
		assert!(check("EmailDomainRestrictionEnabled", "true", &listed).is_ok());
	}

	#[test]
	fn test_non_enabling_values_skip_rules() {
		let empty = OptionSnapshot::default();
		assert!(check("TelegramOAuthEnabled", "false", &empty).is_ok());
		assert!(check("TurnstileCheckEnabled", "TRUE", &empty).is_ok());
		assert!(check("WeChatAuthEnabled", "", &empty).is_ok());
	}

	#[test]
	fn test_unruled_keys_pass() {
		let empty = OptionSnapshot::default();
		assert!(check("RegisterEnabled", "true", &empty).is_ok());
		assert!(rule_for("RegisterEnabled").is_none());
	}

	#[test]
	fn test_missing_lists_every_blank_field() {
		let rule = rule_for("LinuxDoOAuthEnabled").unwrap();
		let snap = snapshot(&[("LinuxDoClientId", s("id"))]);
		assert_eq!(rule.missing(&snap), vec!["LinuxDoClientSecret"]);
	}
}

// vim: ts=4
