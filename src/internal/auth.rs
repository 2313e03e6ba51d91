//! 认证领域模块：登录会话与 nonce 提取。

pub(crate) mod functions;
pub(crate) mod structs;
