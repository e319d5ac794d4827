pub const DEFAULT_BASE_URL: &str = "https://open.bigmodel.cn/api/paas/v4";
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
pub const DEFAULT_MODEL: &str = "glm-4.7";
pub const DEFAULT_TEMPERATURE: f64 = 0.6;
pub const DEFAULT_SYSTEM_PROMPT: &str = "你是一个有用的AI助手。";
pub const DEFAULT_USER_PROMPT: &str = "你好，请介绍一下自己。";
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

pub const ENV_API_KEY: &str = "ZAI_API_KEY";
pub const ENV_BASE_URL: &str = "ZAI_BASE_URL";
pub const ENV_MODEL: &str = "ZAI_MODEL";
pub const ENV_TEMPERATURE: &str = "ZAI_TEMPERATURE";
pub const ENV_SYSTEM_PROMPT: &str = "ZAI_SYSTEM_PROMPT";

pub const FLAG_HELP_SHORT: &str = "-h";
pub const FLAG_HELP_LONG: &str = "-help";
