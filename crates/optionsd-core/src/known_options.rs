//! Registration of the application's known option set
//!
//! Grouped by feature. Secrets follow the `*Token` / `*Secret` / `*Key` naming
//! so the read endpoint never returns them.

use crate::options::{OptionDefinition, OptionKind, OptionRegistry, OptionValue};
use crate::prelude::*;

const DEFAULT_EMAIL_DOMAINS: [&str; 9] = [
	"gmail.com",
	"163.com",
	"126.com",
	"qq.com",
	"outlook.com",
	"hotmail.com",
	"icloud.com",
	"yahoo.com",
	"foxmail.com",
];

fn flag(key: &str, description: &str, default: bool) -> ClResult<OptionDefinition> {
	OptionDefinition::builder(key, OptionKind::Bool)
		.description(description)
		.default(OptionValue::Bool(default))
		.build()
}

fn text(key: &str, description: &str) -> ClResult<OptionDefinition> {
	OptionDefinition::builder(key, OptionKind::String).description(description).build()
}

fn non_negative(v: &OptionValue) -> ClResult<()> {
	match v {
		OptionValue::Int(i) if *i < 0 => Err(Error::ValidationError("Value must not be negative".into())),
		OptionValue::Float(f) if *f < 0.0 => {
			Err(Error::ValidationError("Value must not be negative".into()))
		}
		_ => Ok(()),
	}
}

/// Register all known options
pub fn register_options(registry: &mut OptionRegistry) -> ClResult<()> {
	register_general_options(registry)?;
	register_auth_options(registry)?;
	register_email_options(registry)?;
	register_payment_options(registry)?;
	register_worker_options(registry)?;
	Ok(())
}

fn register_general_options(registry: &mut OptionRegistry) -> ClResult<()> {
	registry.register(text("ServerAddress", "Public base URL of this server")?)?;

	// Per-group multipliers for top-ups, stored as a JSON object
	registry.register(
		OptionDefinition::builder("TopupGroupRatio", OptionKind::String)
			.description("Top-up ratio per user group (JSON object)")
			.default(OptionValue::String(r#"{"default":1}"#.into()))
			.validator(|v| match v {
				OptionValue::String(s) => match serde_json::from_str::<serde_json::Value>(s) {
					Ok(serde_json::Value::Object(_)) => Ok(()),
					_ => Err(Error::ValidationError("TopupGroupRatio must be a JSON object".into())),
				},
				_ => Err(Error::ValidationError("TopupGroupRatio must be a string".into())),
			})
			.build()?,
	)?;

	Ok(())
}

fn register_auth_options(registry: &mut OptionRegistry) -> ClResult<()> {
	registry.register(flag("PasswordLoginEnabled", "Allow login with password", true)?)?;
	registry.register(flag("PasswordRegisterEnabled", "Allow registration with password", true)?)?;
	registry.register(flag("RegisterEnabled", "Allow new user registrations", true)?)?;

	// GitHub OAuth
	registry.register(flag("GitHubOAuthEnabled", "Allow login with GitHub", false)?)?;
	registry.register(text("GitHubClientId", "GitHub OAuth client id")?)?;
	registry.register(text("GitHubClientSecret", "GitHub OAuth client secret")?)?;

	// LinuxDo OAuth
	registry.register(flag("LinuxDoOAuthEnabled", "Allow login with LinuxDo", false)?)?;
	registry.register(text("LinuxDoClientId", "LinuxDo OAuth client id")?)?;
	registry.register(text("LinuxDoClientSecret", "LinuxDo OAuth client secret")?)?;
	registry.register(
		OptionDefinition::builder("LinuxDoMinLevel", OptionKind::Int)
			.description("Minimum LinuxDo trust level allowed to log in")
			.validator(non_negative)
			.build()?,
	)?;

	// Telegram
	registry.register(flag("TelegramOAuthEnabled", "Allow login with Telegram", false)?)?;
	registry.register(text("TelegramBotToken", "Telegram bot token")?)?;
	registry.register(text("TelegramBotName", "Telegram bot name")?)?;

	// WeChat, through an external auth server
	registry.register(flag("WeChatAuthEnabled", "Allow login with WeChat", false)?)?;
	registry.register(text("WeChatServerAddress", "WeChat auth server address")?)?;
	registry.register(text("WeChatServerToken", "WeChat auth server access token")?)?;
	registry.register(text("WeChatAccountQRCodeImageURL", "WeChat account QR code image URL")?)?;

	// Turnstile
	registry.register(flag("TurnstileCheckEnabled", "Require a Turnstile challenge", false)?)?;
	registry.register(text("TurnstileSiteKey", "Turnstile site key")?)?;
	registry.register(text("TurnstileSecretKey", "Turnstile secret key")?)?;

	Ok(())
}

fn register_email_options(registry: &mut OptionRegistry) -> ClResult<()> {
	registry.register(text("SMTPServer", "SMTP server host")?)?;
	registry.register(text("SMTPAccount", "SMTP account name")?)?;
	registry.register(text("SMTPFrom", "Sender address")?)?;
	registry.register(text("SMTPToken", "SMTP password or token")?)?;
	registry.register(
		OptionDefinition::builder("SMTPPort", OptionKind::Int)
			.description("SMTP server port")
			.default(OptionValue::Int(587))
			.validator(|v| match v {
				OptionValue::Int(port) if (1..=65535).contains(port) => Ok(()),
				_ => Err(Error::ValidationError("SMTPPort must be between 1 and 65535".into())),
			})
			.build()?,
	)?;
	registry.register(flag("SMTPSSLEnabled", "Connect to the SMTP server over TLS", false)?)?;

	registry.register(flag("EmailVerificationEnabled", "Require email verification", false)?)?;
	registry.register(flag(
		"EmailDomainRestrictionEnabled",
		"Only allow registration from whitelisted email domains",
		false,
	)?)?;
	registry.register(flag("EmailAliasRestrictionEnabled", "Reject email aliases", false)?)?;
	registry.register(
		OptionDefinition::builder("EmailDomainWhitelist", OptionKind::StringList)
			.description("Email domains allowed when domain restriction is enabled")
			.default(OptionValue::StringList(
				DEFAULT_EMAIL_DOMAINS.iter().map(|d| (*d).to_string()).collect(),
			))
			.build()?,
	)?;

	Ok(())
}

fn register_payment_options(registry: &mut OptionRegistry) -> ClResult<()> {
	registry.register(text("PayAddress", "Payment gateway address")?)?;
	registry.register(text("CustomCallbackAddress", "Callback address override for payments")?)?;
	registry.register(text("EpayId", "Payment merchant id")?)?;
	registry.register(text("EpayKey", "Payment merchant key")?)?;
	registry.register(
		OptionDefinition::builder("Price", OptionKind::Float)
			.description("Price of one unit of quota")
			.default(OptionValue::Float(7.3))
			.validator(non_negative)
			.build()?,
	)?;
	registry.register(
		OptionDefinition::builder("MinTopUp", OptionKind::Int)
			.description("Minimum top-up amount")
			.default(OptionValue::Int(1))
			.validator(non_negative)
			.build()?,
	)?;

	Ok(())
}

fn register_worker_options(registry: &mut OptionRegistry) -> ClResult<()> {
	registry.register(text("WorkerUrl", "Outbound request worker URL")?)?;
	registry.register(text("WorkerValidKey", "Outbound request worker key")?)?;
	Ok(())
}


// vim: ts=4
