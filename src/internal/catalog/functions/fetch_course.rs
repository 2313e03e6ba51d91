//! 从目录 API 获取课程元数据。

use crate::internal::auth::structs::portal_auth::PortalAuth;
use crate::internal::catalog::structs::catalog_error::CatalogError;
use crate::internal::catalog::structs::course_catalog::CourseCatalog;

/// 目录 API 的课程端点（相对 API 根地址）
const COURSE_PATH_PREFIX: &str = "v1/kabuki/courses/";

/// 按 slug 获取课程目录。
///
/// 必须在成功登录之后调用；未认证时服务端行为不确定（可能返回残缺数据
/// 或直接拒绝），本函数不对此做特殊区分，异常状态统一走
/// [`CatalogError::Status`]。
pub async fn fetch_course(
    auth: &PortalAuth,
    course_slug: &str,
) -> Result<CourseCatalog, CatalogError> {
    let url = auth
        .api_base_url
        .join(&format!("{COURSE_PATH_PREFIX}{course_slug}"))?;

    let res = auth.client.get(url).send().await?;

    let status = res.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status));
    }

    let catalog: CourseCatalog =
        res.json().await.map_err(CatalogError::Decode)?;

    tracing::info!(
        course = %catalog.slug,
        title = %catalog.title,
        lessons = catalog.lesson_hashes.len(),
        "课程目录已获取"
    );

    Ok(catalog)
}
