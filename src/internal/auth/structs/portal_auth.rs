use core::fmt;
use std::sync::Arc;

use reqwest::{
    Client, StatusCode,
    cookie::Jar,
    header::{HeaderMap, HeaderValue, USER_AGENT},
    redirect,
};
use sha2::{Digest, Sha256};
use url::Url;

use crate::internal::auth::functions::extract_nonce::extract_nonce;
use crate::internal::auth::structs::auth_error::AuthError;

/// 登录端点（相对站点根路径）
const LOGIN_PATH: &str = "login/";

/// 默认 UA，模拟桌面浏览器；部分站点会拒绝非浏览器 UA 的登录请求
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_6) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/63.0.3239.132 Safari/537.36";

/// 认证会话结构体
///
/// 该结构体定位
/// - 登录一次后，Cookie 会话对本实例发出的所有后续请求自动生效
/// - 为目录获取、媒体地址解析和流式下载提供网络访问支持
///
/// 凭据本身不落盘也不留存，登录成功后只保留一个 SHA-256 指纹用于比较；
/// 默认 Eq 时会匹配 base_url 和指纹，如果需要单独比较指纹，需使用 eq_only_token 方法
#[derive(Clone)]
pub struct PortalAuth {
    pub client: Client, // 内部是Arc，不需要特殊处理
    pub base_url: Arc<Url>, // Arc避免深拷贝，一般也没人会改它
    pub api_base_url: Arc<Url>,
    /// 登录 POST 专用客户端：302 是成功信号，绝不能被自动跟随吞掉
    pub(crate) login_client: Client,
    pub(crate) credential_fingerprint: Option<Arc<String>>, // 对外导出时，不允许直接访问
}

impl PortalAuth {
    /// 创建新的认证会话；此时尚未登录，需调用 [`PortalAuth::login`]。
    ///
    /// 两个参数分别是站点根地址与目录 API 根地址。
    pub fn new(base_url: &str, api_base_url: &str) -> Result<Self, AuthError> {
        let base_url = _format_base_url(base_url)?;
        let api_base_url = _format_base_url(api_base_url)?;

        let http_clients = _InternalHttpClients::_create()?;

        Ok(Self {
            client: http_clients.client,
            base_url: Arc::new(base_url),
            api_base_url: Arc::new(api_base_url),
            login_client: http_clients.login_client,
            credential_fingerprint: None,
        })
    }

    /// 拉取登录页原始 HTML；仅用于在每次登录尝试前获取新鲜 nonce（令牌一次性）。
    pub async fn fetch_login_page(&self) -> Result<String, AuthError> {
        let url = self.base_url.join(LOGIN_PATH)?;
        let res = self.client.get(url).send().await?;
        Ok(res.text().await?)
    }

    /// 提交登录表单 {username, password, remember, nonce}。
    ///
    /// 服务端以 HTTP 302 表示成功，此时 Cookie 已写入共享 cookie jar，
    /// 本实例的所有后续请求自动携带会话；其余状态码一律返回
    /// [`AuthError::Rejected`]，不保留任何状态。
    ///
    /// 单次尝试，不做重试；是否重新提示输入由调用方决定。
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let html = self.fetch_login_page().await?;
        let nonce = extract_nonce(&html)?;

        let form = [
            ("username", username),
            ("password", password),
            ("remember", "on"),
            ("nonce", nonce.as_str()),
        ];

        let url = self.base_url.join(LOGIN_PATH)?;
        let res = self.login_client.post(url).form(&form).send().await?;

        let status = res.status();
        if status != StatusCode::FOUND {
            tracing::warn!(%status, "登录被拒绝");
            return Err(AuthError::Rejected(status));
        }

        self.credential_fingerprint =
            Some(Arc::new(_encrypt_str(&format!("{username}:{password}"))));
        tracing::info!(user = %username, "登录成功");
        Ok(())
    }

    /// 是否已成功登录过。
    pub fn is_authenticated(&self) -> bool {
        self.credential_fingerprint.is_some()
    }

    /// 仅比较凭据指纹是否相等
    pub fn eq_only_token(&self, other: &Self) -> bool {
        self.credential_fingerprint == other.credential_fingerprint
    }
}

/// 用于比较认证会话是否相等
impl PartialEq for PortalAuth {
    fn eq(&self, other: &Self) -> bool {
        self.credential_fingerprint == other.credential_fingerprint
            && self.base_url == other.base_url
    }
}

/// 防止debug泄漏账号
impl fmt::Debug for PortalAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortalAuth")
            .field("base_url", &self.base_url.as_str())
            .field("client", &"<Client with hidden session>")
            .finish()
    }
}

fn _encrypt_str(data: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn _format_base_url(url: &str) -> Result<Url, AuthError> {
    let mut base_url = Url::parse(url)?;

    if !base_url.path().ends_with('/') {
        let new_path = format!("{}/", base_url.path());
        base_url.set_path(&new_path);
    }

    Ok(base_url)
}

/// 内部临时使用的http客户端结构体，在初始化PortalAuth时使用
struct _InternalHttpClients {
    client: Client,
    login_client: Client,
}

impl _InternalHttpClients {
    /// 创建http客户端，内部使用；两个客户端共享同一个 cookie jar
    fn _create() -> Result<Self, AuthError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

        let jar = Arc::new(Jar::default());

        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .default_headers(headers.clone())
            .build()
            .map_err(AuthError::BuildClient)?;

        // 登录 POST 不跟随重定向，否则观察不到 302 成功信号
        let login_client = Client::builder()
            .cookie_provider(jar)
            .default_headers(headers)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(AuthError::BuildClient)?;

        Ok(Self {
            client,
            login_client,
        })
    }
}
