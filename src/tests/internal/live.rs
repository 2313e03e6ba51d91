//! 真实站点冒烟测试：`src/tests/env/portal.env` 存在时才执行，无则跳过。

use crate::auth::PortalAuth;
use crate::tests::load_account_optional;

#[tokio::test]
async fn login_against_real_portal() {
    let Some(account) = load_account_optional() else {
        return;
    };

    let mut auth = PortalAuth::new(&account.base_url, &account.api_base_url)
        .expect("env 中的站点地址应合法");

    match auth.login(&account.username, &account.password).await {
        Ok(()) => println!("真实站点登录成功"),
        Err(e) => eprintln!("真实站点登录失败（可检查 env）：{e}"),
    }
}
