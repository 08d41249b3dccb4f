use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub argon2: Argon2Config,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub cors: CorsConfig,
    pub upload: UploadConfig,
    pub excel: ExcelConfig,
    pub letters: LetterConfig,
    pub seed: SeedConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: "Coop Management System".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            unix_socket_path: String::new(),
            workers: 0,
            max_workers: 8,
            timeouts: TimeoutConfig::default(),
            limits: LimitConfig::default(),
        }
    }
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            client_request: 5000,
            client_disconnect: 1000,
            keep_alive: 30,
        }
    }
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_payload_size: 16 * 1024 * 1024,
        }
    }
}

/// JWT 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    #[serde(skip_serializing)] // 不序列化到JSON响应中
    pub secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
    pub refresh_token_remember_me_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "coop-development-secret".to_string(),
            access_token_expiry: 15,
            refresh_token_expiry: 7,
            refresh_token_remember_me_expiry: 30,
        }
    }
}

/// Argon2 密码哈希参数
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Argon2Config {
    pub memory_cost: u32, // KiB
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: 19456,
            time_cost: 2,
            parallelism: 1,
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "coop.db".to_string(),
            pool_size: 10,
            timeout: 30,
        }
    }
}

/// 缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    #[serde(rename = "type")]
    pub cache_type: String,
    pub default_ttl: u64,
    pub redis: RedisConfig,
    pub memory: MemoryConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_type: "moka".to_string(),
            default_ttl: 300,
            redis: RedisConfig::default(),
            memory: MemoryConfig::default(),
        }
    }
}

/// Redis 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    pub url: String,
    pub key_prefix: String,
    pub pool_size: u64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1/".to_string(),
            key_prefix: "coop:".to_string(),
            pool_size: 10,
        }
    }
}

/// 内存缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    pub max_capacity: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
        }
    }
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: ["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            allowed_headers: vec!["*".to_string()],
            max_age: 3600,
        }
    }
}

/// 访视照片上传配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub dir: String,                // 上传目录
    pub max_size: usize,            // 单文件最大字节数
    pub allowed_types: Vec<String>, // 允许的扩展名
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: "uploads".to_string(),
            max_size: 5 * 1024 * 1024,
            allowed_types: vec![".jpg".to_string(), ".jpeg".to_string(), ".png".to_string()],
        }
    }
}

/// Excel 导入配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcelConfig {
    /// 临时目录，为空时使用系统临时目录
    pub temp_dir: String,
    pub max_size: usize,
    pub allowed_types: Vec<String>,
}

impl Default for ExcelConfig {
    fn default() -> Self {
        Self {
            temp_dir: String::new(),
            max_size: 10 * 1024 * 1024,
            allowed_types: vec![".xlsx".to_string(), ".xls".to_string()],
        }
    }
}

/// 公函生成配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterConfig {
    /// 浏览器可执行文件路径，为空时自动探测
    pub chrome_executable: String,
    /// 单次渲染超时（秒）
    pub render_timeout: u64,
    /// 公文编号前缀，如 "อว๐๖๕๔.๐๒"
    pub document_prefix: String,
    pub faculty_name_th: String,
    pub faculty_name_en: String,
    pub university_name_th: String,
    pub university_name_en: String,
    pub address_th: Vec<String>,
    pub address_en: Vec<String>,
    pub signer_name_th: String,
    pub signer_name_en: String,
    pub signer_position_th: String,
    pub signer_position_en: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl Default for LetterConfig {
    fn default() -> Self {
        Self {
            chrome_executable: String::new(),
            render_timeout: 30,
            document_prefix: "อว๐๖๕๔.๐๒".to_string(),
            faculty_name_th: "คณะบริหารธุรกิจและศิลปศาสตร์".to_string(),
            faculty_name_en: "Faculty of Business Administration and Liberal Arts".to_string(),
            university_name_th: "มหาวิทยาลัยเทคโนโลยีราชมงคลล้านนา".to_string(),
            university_name_en: "Rajamangala University of Technology Lanna".to_string(),
            address_th: vec![
                "๑๒๘ ถนนห้วยแก้ว ตำบลช้างเผือก".to_string(),
                "อำเภอเมืองเชียงใหม่ จังหวัดเชียงใหม่ ๕๐๓๐๐".to_string(),
            ],
            address_en: vec![
                "128 Huay Kaew Road, Chang Puek,".to_string(),
                "Mueang, Chiang Mai 50300".to_string(),
                "THAILAND".to_string(),
            ],
            signer_name_th: String::new(),
            signer_name_en: String::new(),
            signer_position_th: "คณบดีคณะบริหารธุรกิจและศิลปศาสตร์".to_string(),
            signer_position_en: "Dean, Faculty of Business Administration and Liberal Arts"
                .to_string(),
            contact_email: String::new(),
            contact_phone: String::new(),
        }
    }
}

/// 初始数据配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// 是否写入演示用的组织架构和账号
    pub demo_data: bool,
}
