//! 认证测试：302 成功信号、会话 Cookie 的延续、失败时不保留状态、每次登录拉取新鲜 nonce。

use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::auth::{AuthError, PortalAuth};
use crate::tests::{TEST_NONCE, mock_auth, mount_login};

#[tokio::test]
async fn login_success_on_302_and_session_carries_over() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    // 登录后的请求必须自动携带会话 Cookie
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("cookie", "portal_session=s3cr3t"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let mut auth = mock_auth(&server);
    assert!(!auth.is_authenticated());

    auth.login("tester", "hunter2").await.expect("登录应成功");
    assert!(auth.is_authenticated());

    let res = auth
        .client
        .get(format!("{}/profile", server.uri()))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);
}

#[tokio::test]
async fn login_post_carries_form_fields_and_fresh_nonce() {
    let server = MockServer::start().await;

    let login_html = format!(r#"<input type="hidden" name="nonce" value="{TEST_NONCE}" />"#);
    Mock::given(method("GET"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(login_html))
        .expect(2) // 两次登录 = 两次拉取登录页（nonce 一次性）
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/login/"))
        .and(body_string_contains("username=tester"))
        .and(body_string_contains("remember=on"))
        .and(body_string_contains(format!("nonce={TEST_NONCE}")))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/"))
        .expect(2)
        .mount(&server)
        .await;

    let mut auth = mock_auth(&server);
    auth.login("tester", "hunter2").await.unwrap();
    auth.login("tester", "hunter2").await.unwrap();
}

#[tokio::test]
async fn login_rejected_on_non_302() {
    let server = MockServer::start().await;

    let login_html = format!(r#"<input type="hidden" name="nonce" value="{TEST_NONCE}" />"#);
    Mock::given(method("GET"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(login_html))
        .mount(&server)
        .await;

    // 凭据错误时站点返回 200 登录页而非重定向
    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    let mut auth = mock_auth(&server);
    let err = auth.login("tester", "wrong").await.unwrap_err();

    match err {
        AuthError::Rejected(status) => assert_eq!(status.as_u16(), 200),
        other => panic!("预期 Rejected，得到 {other:?}"),
    }
    // 失败后不保留任何会话状态
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn login_fails_when_nonce_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>改版了</html>"))
        .mount(&server)
        .await;

    let mut auth = mock_auth(&server);
    let err = auth.login("tester", "hunter2").await.unwrap_err();
    assert!(matches!(err, AuthError::Nonce(_)));
}

#[tokio::test]
async fn debug_output_hides_credentials() {
    let server = MockServer::start().await;
    let auth = PortalAuth::new(&server.uri(), &server.uri()).unwrap();

    let dbg = format!("{auth:?}");
    assert!(dbg.contains("hidden session"));
    assert!(!dbg.contains("hunter2"));
}
