// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use crate::endpoints::{Endpoints, LinkDefaults};
use anyhow::{self as ah, Context as _};
use minilink_util::{
    PagePath, Query, QueryValue, decode_query, encode_query, encode_uri_component,
};
use serde::Serialize;
use std::{
    fmt::{Display, Formatter},
    sync::OnceLock,
};

/// Percent-encoded '&'.
/// Joins page query and global query into one `query=` value.
const ENCODED_AMP: &str = "%26";

/// `jdType` selecting the JD Finance scheme.
pub const JDJR_TYPE: &str = "jdjr";

static DEFAULT_GENERATOR: OnceLock<LinkGenerator> = OnceLock::new();

/// Mini program platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Alipay.
    Alipay,
    /// WeChat.
    Wechat,
    /// ByteDance (Douyin, Toutiao).
    Bytedance,
    /// JD mall or JD Finance.
    Jd,
}

impl Platform {
    /// Look up a platform by its upper case name.
    /// Returns `None` for anything but the four known names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ALIPAY" => Some(Self::Alipay),
            "WECHAT" => Some(Self::Wechat),
            "BYTEDANCE" => Some(Self::Bytedance),
            "JD" => Some(Self::Jd),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Alipay => "ALIPAY",
            Self::Wechat => "WECHAT",
            Self::Bytedance => "BYTEDANCE",
            Self::Jd => "JD",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

/// Global query of a link request.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryInput {
    /// Pre-formatted `name=value&...` string.
    Text(String),
    /// Name/value mapping.
    Params(Query<QueryValue>),
}

impl QueryInput {
    /// The query as one percent-encoded string.
    fn normalize(&self) -> String {
        match self {
            Self::Text(q) => encode_uri_component(q),
            Self::Params(q) => encode_uri_component(&encode_query(q)),
        }
    }
}

impl From<&str> for QueryInput {
    fn from(q: &str) -> Self {
        Self::Text(q.to_string())
    }
}

impl From<String> for QueryInput {
    fn from(q: String) -> Self {
        Self::Text(q)
    }
}

impl From<Query<QueryValue>> for QueryInput {
    fn from(q: Query<QueryValue>) -> Self {
        Self::Params(q)
    }
}

/// Link generation request.
///
/// A request without platform generates empty links.
#[derive(Debug, Clone, Default)]
pub struct LinkRequest {
    pub platform: Option<Platform>,
    pub app_id: String,
    /// Platform code of the redirect page.
    pub mini_type: Option<String>,
    /// `path` or `path?query`.
    pub page: Option<String>,
    pub query: Option<QueryInput>,
    /// `release`, `trial` or `develop`.
    pub env_version: Option<String>,
    /// [JDJR_TYPE] selects JD Finance, anything else JD mall.
    pub jd_type: Option<String>,
}

impl LinkRequest {
    pub fn new(platform: Platform, app_id: impl Into<String>) -> Self {
        Self {
            platform: Some(platform),
            app_id: app_id.into(),
            ..Default::default()
        }
    }

    pub fn with_mini_type(mut self, mini_type: impl Display) -> Self {
        self.mini_type = Some(mini_type.to_string());
        self
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<QueryInput>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_env_version(mut self, env_version: impl Into<String>) -> Self {
        self.env_version = Some(env_version.into());
        self
    }

    pub fn with_jd_type(mut self, jd_type: impl Into<String>) -> Self {
        self.jd_type = Some(jd_type.into());
        self
    }
}

/// A native scheme and the https link it can be shared as.
///
/// `scheme` is empty for platforms without a native scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkResult {
    pub scheme: String,
    pub https: String,
}

#[derive(Serialize)]
#[serde(untagged)]
enum JdParam<'a> {
    Text(&'a str),
    Params(&'a Query<QueryValue>),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JdSchemeParams<'a> {
    category: &'static str,
    des: &'static str,
    app_id: &'a str,
    vapptype: u8,
    param: JdParam<'a>,
    path: String,
}

#[derive(Serialize)]
struct JdjrParam<'a> {
    #[serde(rename = "type")]
    type_: &'a JdSchemeParams<'a>,
}

/// Page query and global query as siblings.
fn sibling_query(page: &PagePath, query: &str) -> String {
    [page.encoded_query(), query.to_string()]
        .into_iter()
        .filter(|q| !q.is_empty())
        .collect::<Vec<_>>()
        .join(ENCODED_AMP)
}

/// Builds platform links on a set of [Endpoints].
#[derive(Debug, Clone, Default)]
pub struct LinkGenerator {
    endpoints: Endpoints,
    defaults: LinkDefaults,
}

impl LinkGenerator {
    pub fn new(endpoints: Endpoints, defaults: LinkDefaults) -> Self {
        Self {
            endpoints,
            defaults,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn defaults(&self) -> &LinkDefaults {
        &self.defaults
    }

    /// Generate the links for the requested platform.
    pub fn generate(&self, req: &LinkRequest) -> ah::Result<LinkResult> {
        let query = req
            .query
            .as_ref()
            .map(QueryInput::normalize)
            .unwrap_or_default();
        let page = PagePath::split(req.page.as_deref().unwrap_or(""));

        let link = match req.platform {
            Some(Platform::Alipay) => self.alipay(req, &page, &query),
            Some(Platform::Wechat) => self.wechat(req, &page, &query),
            Some(Platform::Bytedance) => self.bytedance(req, &page, &query)?,
            Some(Platform::Jd) => self.jd(req)?,
            None => {
                log::warn!("No known platform in link request. Returning empty links.");
                return Ok(LinkResult::default());
            }
        };
        log::debug!(
            "{} link for '{}': scheme='{}' https='{}'",
            req.platform.map_or("", |p| p.name()),
            req.app_id,
            link.scheme,
            link.https
        );
        Ok(link)
    }

    fn env_version<'a>(&'a self, req: &'a LinkRequest) -> &'a str {
        req.env_version
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(&self.defaults.env_version)
    }

    /// The https link on the redirect page, shared by WeChat and ByteDance.
    fn to_schema_https(&self, req: &LinkRequest, page: &PagePath, query: &str) -> String {
        let mut https = format!(
            "{}?miniType={}",
            self.endpoints.to_schema,
            req.mini_type.as_deref().unwrap_or("")
        );
        if !page.path().is_empty() {
            https.push_str(&format!("&path={}", page.path()));
        }
        if !query.is_empty() {
            https.push_str(&format!("&query={query}"));
        }
        https.push_str(&format!("&envVersion={}", self.env_version(req)));
        https
    }

    fn alipay(&self, req: &LinkRequest, page: &PagePath, query: &str) -> LinkResult {
        let mut scheme = format!("{}?appId={}", self.endpoints.alipay_scheme, req.app_id);
        let full_path = page.encoded_full_path();
        if !full_path.is_empty() {
            scheme.push_str(&format!("&page={full_path}"));
        }
        if !query.is_empty() {
            scheme.push_str(&format!("&query={query}"));
        }
        let https = format!(
            "{}?scheme={}",
            self.endpoints.alipay_https,
            encode_uri_component(&scheme)
        );
        LinkResult { scheme, https }
    }

    fn wechat(&self, req: &LinkRequest, page: &PagePath, query: &str) -> LinkResult {
        let query = sibling_query(page, query);
        let path = if page.path().is_empty() {
            self.defaults.wechat_path.as_str()
        } else {
            page.path()
        };
        let mut scheme = format!(
            "{}?appid={}&path={path}",
            self.endpoints.wechat_scheme, req.app_id
        );
        if !query.is_empty() {
            scheme.push_str(&format!("&query={query}"));
        }
        let https = self.to_schema_https(req, page, &query);
        LinkResult { scheme, https }
    }

    fn bytedance(&self, req: &LinkRequest, page: &PagePath, query: &str) -> ah::Result<LinkResult> {
        // ByteDance takes the query as a JSON object.
        let query = decode_query(&sibling_query(page, query)).context("Decode ByteDance query")?;
        let query = serde_json::to_string(&query).context("Serialize ByteDance query")?;
        Ok(LinkResult {
            scheme: String::new(),
            https: self.to_schema_https(req, page, &query),
        })
    }

    fn jd(&self, req: &LinkRequest) -> ah::Result<LinkResult> {
        let empty = Query::new();
        let param = match &req.query {
            Some(QueryInput::Text(q)) if !q.is_empty() => JdParam::Text(q),
            Some(QueryInput::Params(q)) => JdParam::Params(q),
            _ => JdParam::Params(&empty),
        };
        let page = req.page.as_deref().unwrap_or("");
        let path = if page.contains('?') {
            page.replacen('?', ".html?", 1)
        } else {
            format!("{page}.html")
        };
        let vapptype = match req.env_version.as_deref() {
            Some("trial" | "develop") => 2,
            _ => 1,
        };
        let params = JdSchemeParams {
            category: "jump",
            des: "jdmp",
            app_id: &req.app_id,
            vapptype,
            param,
            path,
        };

        let scheme = if req.jd_type.as_deref() == Some(JDJR_TYPE) {
            let jrparam = serde_json::to_string(&JdjrParam { type_: &params })
                .context("Serialize JD Finance parameters")?;
            format!(
                "{}?jrparam={jrparam}&jrlogin=false&jrcontainer=native",
                self.endpoints.jdjr_scheme
            )
        } else {
            let params = serde_json::to_string(&params).context("Serialize JD parameters")?;
            format!("{}?params={params}", self.endpoints.jd_scheme)
        };
        let https = format!(
            "{}?scheme={}",
            self.endpoints.to_schema,
            encode_uri_component(&scheme)
        );
        Ok(LinkResult { scheme, https })
    }
}

/// The generator on the built-in endpoints.
pub fn default_generator() -> &'static LinkGenerator {
    DEFAULT_GENERATOR.get_or_init(LinkGenerator::default)
}

/// Generate platform links on the built-in endpoints.
pub fn generate_platform_link(req: &LinkRequest) -> ah::Result<LinkResult> {
    default_generator().generate(req)
}

#[cfg(test)]
mod test {
    use super::*;
    use minilink_util::decode_uri_component;

    const ALIPAY_APPID: &str = "2021001155666499";
    const WECHAT_APPID: &str = "wx7157b7ee8d09ee9f";
    const TT_APPID: &str = "tt6c8e1a33f3b48307";
    const JD_APPID: &str = "3DE6A10EDB4F7DF38ECA9C11516FBA65";
    const DETAIL: &str = "others/good-detail/good-detail?id=111";
    const DASHBOARD: &str = "pages/tabbar/dashboard/dashboard";

    fn link(req: &LinkRequest) -> LinkResult {
        generate_platform_link(req).unwrap()
    }

    fn params(comps: &[(&str, &str)]) -> Query<QueryValue> {
        comps.iter().map(|(n, v)| (*n, *v)).collect()
    }

    #[test]
    fn test_platform_names() {
        for p in [
            Platform::Alipay,
            Platform::Wechat,
            Platform::Bytedance,
            Platform::Jd,
        ] {
            assert_eq!(Platform::from_name(p.name()), Some(p));
            assert_eq!(p.to_string(), p.name());
        }
        assert_eq!(Platform::from_name("alipay"), None);
        assert_eq!(Platform::from_name("QQ"), None);
        assert_eq!(Platform::from_name(""), None);
    }

    #[test]
    fn test_no_platform() {
        assert_eq!(link(&LinkRequest::default()), LinkResult::default());

        let req = LinkRequest {
            app_id: ALIPAY_APPID.to_string(),
            page: Some(DETAIL.to_string()),
            query: Some("a=1".into()),
            ..Default::default()
        };
        let res = link(&req);
        assert_eq!(res.scheme, "");
        assert_eq!(res.https, "");
    }

    #[test]
    fn test_alipay() {
        let res = link(&LinkRequest::new(Platform::Alipay, ALIPAY_APPID));
        assert_eq!(
            res.scheme,
            "alipays://platformapi/startapp?appId=2021001155666499"
        );
        assert_eq!(
            res.https,
            "https://ds.alipay.com/?scheme=alipays%3A%2F%2Fplatformapi%2Fstartapp%3FappId%3D2021001155666499"
        );

        let res = link(&LinkRequest::new(Platform::Alipay, ALIPAY_APPID).with_page(DASHBOARD));
        assert_eq!(
            res.scheme,
            "alipays://platformapi/startapp?appId=2021001155666499&page=pages/tabbar/dashboard/dashboard"
        );
        assert_eq!(
            res.https,
            "https://ds.alipay.com/?scheme=alipays%3A%2F%2Fplatformapi%2Fstartapp%3FappId%3D2021001155666499%26page%3Dpages%2Ftabbar%2Fdashboard%2Fdashboard"
        );

        let res = link(&LinkRequest::new(Platform::Alipay, ALIPAY_APPID).with_page(DETAIL));
        assert_eq!(
            res.scheme,
            "alipays://platformapi/startapp?appId=2021001155666499&page=others/good-detail/good-detail%3Fid%3D111"
        );
        assert_eq!(
            res.https,
            "https://ds.alipay.com/?scheme=alipays%3A%2F%2Fplatformapi%2Fstartapp%3FappId%3D2021001155666499%26page%3Dothers%2Fgood-detail%2Fgood-detail%253Fid%253D111"
        );
    }

    #[test]
    fn test_alipay_global_query() {
        let scheme = "alipays://platformapi/startapp?appId=2021001155666499&page=others/good-detail/good-detail%3Fid%3D111&query=quotientScene%3Daa_bb";
        let https = "https://ds.alipay.com/?scheme=alipays%3A%2F%2Fplatformapi%2Fstartapp%3FappId%3D2021001155666499%26page%3Dothers%2Fgood-detail%2Fgood-detail%253Fid%253D111%26query%3DquotientScene%253Daa_bb";

        let res = link(
            &LinkRequest::new(Platform::Alipay, ALIPAY_APPID)
                .with_page(DETAIL)
                .with_query("quotientScene=aa_bb"),
        );
        assert_eq!(res.scheme, scheme);
        assert_eq!(res.https, https);

        let res = link(
            &LinkRequest::new(Platform::Alipay, ALIPAY_APPID)
                .with_page(DETAIL)
                .with_query(params(&[("quotientScene", "aa_bb")])),
        );
        assert_eq!(res.scheme, scheme);
        assert_eq!(
            res.https,
            format!("https://ds.alipay.com/?scheme={}", encode_uri_component(scheme))
        );

        // An empty query is left out.
        let res = link(&LinkRequest::new(Platform::Alipay, ALIPAY_APPID).with_query(""));
        assert_eq!(
            res.scheme,
            "alipays://platformapi/startapp?appId=2021001155666499"
        );
    }

    #[test]
    fn test_wechat() {
        let base = LinkRequest::new(Platform::Wechat, WECHAT_APPID).with_mini_type("6");

        let res = link(&base);
        assert_eq!(
            res.scheme,
            "weixin://dl/business/?appid=wx7157b7ee8d09ee9f&path=pages/tabbar/dashboard/dashboard"
        );
        assert_eq!(
            res.https,
            "https://static.youpinhaoche.com/mini/to_schema.html?miniType=6&envVersion=release"
        );

        let res = link(&base.clone().with_page(DASHBOARD));
        assert_eq!(
            res.scheme,
            "weixin://dl/business/?appid=wx7157b7ee8d09ee9f&path=pages/tabbar/dashboard/dashboard"
        );
        assert_eq!(
            res.https,
            "https://static.youpinhaoche.com/mini/to_schema.html?miniType=6&path=pages/tabbar/dashboard/dashboard&envVersion=release"
        );

        let res = link(&base.clone().with_page(DETAIL));
        assert_eq!(
            res.scheme,
            "weixin://dl/business/?appid=wx7157b7ee8d09ee9f&path=others/good-detail/good-detail&query=id%3D111"
        );
        assert_eq!(
            res.https,
            "https://static.youpinhaoche.com/mini/to_schema.html?miniType=6&path=others/good-detail/good-detail&query=id%3D111&envVersion=release"
        );

        let res = link(
            &base
                .clone()
                .with_page(DETAIL)
                .with_query("quotientScene=aa_bb")
                .with_env_version("release"),
        );
        assert_eq!(
            res.scheme,
            "weixin://dl/business/?appid=wx7157b7ee8d09ee9f&path=others/good-detail/good-detail&query=id%3D111%26quotientScene%3Daa_bb"
        );
        assert_eq!(
            res.https,
            "https://static.youpinhaoche.com/mini/to_schema.html?miniType=6&path=others/good-detail/good-detail&query=id%3D111%26quotientScene%3Daa_bb&envVersion=release"
        );

        let res = link(&base.with_query("a=1").with_env_version("trial"));
        assert_eq!(
            res.scheme,
            "weixin://dl/business/?appid=wx7157b7ee8d09ee9f&path=pages/tabbar/dashboard/dashboard&query=a%3D1"
        );
        assert_eq!(
            res.https,
            "https://static.youpinhaoche.com/mini/to_schema.html?miniType=6&query=a%3D1&envVersion=trial"
        );
    }

    #[test]
    fn test_bytedance() {
        let base = LinkRequest::new(Platform::Bytedance, TT_APPID).with_mini_type(2);

        let res = link(&base);
        assert_eq!(res.scheme, "");
        assert_eq!(
            res.https,
            "https://static.youpinhaoche.com/mini/to_schema.html?miniType=2&query={}&envVersion=release"
        );

        let res = link(&base.clone().with_page(DASHBOARD));
        assert_eq!(res.scheme, "");
        assert_eq!(
            res.https,
            "https://static.youpinhaoche.com/mini/to_schema.html?miniType=2&path=pages/tabbar/dashboard/dashboard&query={}&envVersion=release"
        );

        let res = link(&base.clone().with_page(DETAIL));
        assert_eq!(
            res.https,
            r#"https://static.youpinhaoche.com/mini/to_schema.html?miniType=2&path=others/good-detail/good-detail&query={"id":"111"}&envVersion=release"#
        );

        let res = link(
            &base
                .with_page(DETAIL)
                .with_query("quotientScene=aa_bb")
                .with_env_version("release"),
        );
        assert_eq!(res.scheme, "");
        assert_eq!(
            res.https,
            r#"https://static.youpinhaoche.com/mini/to_schema.html?miniType=2&path=others/good-detail/good-detail&query={"id":"111","quotientScene":"aa_bb"}&envVersion=release"#
        );
        let (_, query) = res.https.split_once("&query=").unwrap();
        let query = query.trim_end_matches("&envVersion=release");
        assert_eq!(
            decode_uri_component(query).unwrap(),
            r#"{"id":"111","quotientScene":"aa_bb"}"#
        );
    }

    #[test]
    fn test_bytedance_bad_escape() {
        let req = LinkRequest::new(Platform::Bytedance, TT_APPID)
            .with_mini_type(2)
            .with_query("a=50%");
        assert!(generate_platform_link(&req).is_err());
    }

    #[test]
    fn test_jdjr() {
        let res = link(
            &LinkRequest::new(Platform::Jd, JD_APPID)
                .with_mini_type(41)
                .with_page(DASHBOARD)
                .with_query(params(&[
                    ("quotientScene", "10000564_abc"),
                    ("urlCode", "mejrism0-dj4afzwxv9d"),
                ]))
                .with_jd_type(JDJR_TYPE),
        );
        assert_eq!(
            res.scheme,
            r#"openjdjrapp://com.jd.jrapp/jdminiprogram/open?jrparam={"type":{"category":"jump","des":"jdmp","appId":"3DE6A10EDB4F7DF38ECA9C11516FBA65","vapptype":1,"param":{"quotientScene":"10000564_abc","urlCode":"mejrism0-dj4afzwxv9d"},"path":"pages/tabbar/dashboard/dashboard.html"}}&jrlogin=false&jrcontainer=native"#
        );
        assert_eq!(
            res.https,
            "https://static.youpinhaoche.com/mini/to_schema.html?scheme=openjdjrapp%3A%2F%2Fcom.jd.jrapp%2Fjdminiprogram%2Fopen%3Fjrparam%3D%7B%22type%22%3A%7B%22category%22%3A%22jump%22%2C%22des%22%3A%22jdmp%22%2C%22appId%22%3A%223DE6A10EDB4F7DF38ECA9C11516FBA65%22%2C%22vapptype%22%3A1%2C%22param%22%3A%7B%22quotientScene%22%3A%2210000564_abc%22%2C%22urlCode%22%3A%22mejrism0-dj4afzwxv9d%22%7D%2C%22path%22%3A%22pages%2Ftabbar%2Fdashboard%2Fdashboard.html%22%7D%7D%26jrlogin%3Dfalse%26jrcontainer%3Dnative"
        );

        let res = link(
            &LinkRequest::new(Platform::Jd, JD_APPID)
                .with_mini_type(41)
                .with_page(DASHBOARD)
                .with_jd_type(JDJR_TYPE),
        );
        assert_eq!(
            res.scheme,
            r#"openjdjrapp://com.jd.jrapp/jdminiprogram/open?jrparam={"type":{"category":"jump","des":"jdmp","appId":"3DE6A10EDB4F7DF38ECA9C11516FBA65","vapptype":1,"param":{},"path":"pages/tabbar/dashboard/dashboard.html"}}&jrlogin=false&jrcontainer=native"#
        );
        assert_eq!(
            res.https,
            "https://static.youpinhaoche.com/mini/to_schema.html?scheme=openjdjrapp%3A%2F%2Fcom.jd.jrapp%2Fjdminiprogram%2Fopen%3Fjrparam%3D%7B%22type%22%3A%7B%22category%22%3A%22jump%22%2C%22des%22%3A%22jdmp%22%2C%22appId%22%3A%223DE6A10EDB4F7DF38ECA9C11516FBA65%22%2C%22vapptype%22%3A1%2C%22param%22%3A%7B%7D%2C%22path%22%3A%22pages%2Ftabbar%2Fdashboard%2Fdashboard.html%22%7D%7D%26jrlogin%3Dfalse%26jrcontainer%3Dnative"
        );
    }

    #[test]
    fn test_jd_mall() {
        let res = link(
            &LinkRequest::new(Platform::Jd, JD_APPID)
                .with_page("pages/item/item?sku=1")
                .with_query("from=share")
                .with_env_version("trial"),
        );
        let scheme = r#"openapp.jdmobile://virtual?params={"category":"jump","des":"jdmp","appId":"3DE6A10EDB4F7DF38ECA9C11516FBA65","vapptype":2,"param":"from=share","path":"pages/item/item.html?sku=1"}"#;
        assert_eq!(res.scheme, scheme);
        assert_eq!(
            res.https,
            format!(
                "https://static.youpinhaoche.com/mini/to_schema.html?scheme={}",
                encode_uri_component(scheme)
            )
        );

        let mut q = Query::new();
        q.insert("n", 7i64);
        let res = link(
            &LinkRequest::new(Platform::Jd, JD_APPID)
                .with_page("p")
                .with_query(q)
                .with_env_version("develop")
                .with_jd_type("jd"),
        );
        assert_eq!(
            res.scheme,
            r#"openapp.jdmobile://virtual?params={"category":"jump","des":"jdmp","appId":"3DE6A10EDB4F7DF38ECA9C11516FBA65","vapptype":2,"param":{"n":7},"path":"p.html"}"#
        );

        let res = link(&LinkRequest::new(Platform::Jd, JD_APPID).with_query(""));
        assert_eq!(
            res.scheme,
            r#"openapp.jdmobile://virtual?params={"category":"jump","des":"jdmp","appId":"3DE6A10EDB4F7DF38ECA9C11516FBA65","vapptype":1,"param":{},"path":".html"}"#
        );
    }

    #[test]
    fn test_custom_endpoints() {
        let endpoints = Endpoints {
            to_schema: "https://example.com/go".to_string(),
            ..Default::default()
        };
        let defaults = LinkDefaults {
            wechat_path: "pages/home/home".to_string(),
            env_version: "develop".to_string(),
        };
        let generator = LinkGenerator::new(endpoints, defaults);
        let res = generator
            .generate(&LinkRequest::new(Platform::Wechat, WECHAT_APPID).with_mini_type(6))
            .unwrap();
        assert_eq!(
            res.scheme,
            "weixin://dl/business/?appid=wx7157b7ee8d09ee9f&path=pages/home/home"
        );
        assert_eq!(
            res.https,
            "https://example.com/go?miniType=6&envVersion=develop"
        );
    }
}

// vim: ts=4 sw=4 expandtab
