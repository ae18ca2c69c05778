// ==========================================
// 工地状态分级库 - 列表过滤
// ==========================================
// 职责: 搜索框文本 + 分面标签 → 过滤后的记录
// 红线: 过滤条件由展示层持有并以参数传入; 本模块无状态
// ==========================================

use crate::domain::finance::{Budget, Expense};
use crate::domain::labor::WorkerAttendance;
use crate::domain::material::MaterialStock;
use crate::domain::project::Project;
use crate::domain::safety::{SafetyIncident, SafetyInspection};
use crate::domain::types::{
    normalize_token, BudgetStatus, ExpenseStatus, IncidentSeverity, InspectionStatus,
    ProjectStatus, StatusToken,
};

// ==========================================
// Trait: Searchable
// ==========================================
// 用途: 记录暴露可搜索字段与分面取值
pub trait Searchable {
    /// 参与文本搜索的字段
    fn search_fields(&self) -> Vec<&str>;

    /// 分面取值（材料=类别, 工人=工种, 其余=状态令牌）
    fn facet(&self) -> &str;

    /// 分面是否为本类记录的声明取值（状态类记录按枚举判断）
    fn declares_facet(_facet: &str) -> bool
    where
        Self: Sized,
    {
        false
    }
}

/// 令牌是否属于状态枚举 T
fn is_declared_token<T: StatusToken>(facet: &str) -> bool {
    T::from_token(&normalize_token(facet)).is_some()
}

impl Searchable for MaterialStock {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.category.as_str(),
            self.supplier.as_str(),
        ]
    }

    fn facet(&self) -> &str {
        &self.category
    }
}

impl Searchable for WorkerAttendance {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.role.as_str(), self.contact.as_str()];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }

    fn facet(&self) -> &str {
        &self.role
    }
}

impl Searchable for SafetyInspection {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.inspector.as_str(), self.location.as_str()];
        fields.extend(self.findings.iter().map(String::as_str));
        fields
    }

    fn facet(&self) -> &str {
        self.status.token()
    }

    fn declares_facet(facet: &str) -> bool {
        is_declared_token::<InspectionStatus>(facet)
    }
}

impl Searchable for SafetyIncident {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.incident_type.as_str(),
            self.location.as_str(),
            self.description.as_str(),
            self.reported_by.as_str(),
        ]
    }

    fn facet(&self) -> &str {
        self.severity.token()
    }

    fn declares_facet(facet: &str) -> bool {
        is_declared_token::<IncidentSeverity>(facet)
    }
}

impl Searchable for Budget {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.category.as_str()]
    }

    fn facet(&self) -> &str {
        self.status.token()
    }

    fn declares_facet(facet: &str) -> bool {
        is_declared_token::<BudgetStatus>(facet)
    }
}

impl Searchable for Expense {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.category.as_str(), self.description.as_str()];
        if let Some(approver) = &self.approved_by {
            fields.push(approver.as_str());
        }
        fields
    }

    fn facet(&self) -> &str {
        self.status.token()
    }

    fn declares_facet(facet: &str) -> bool {
        is_declared_token::<ExpenseStatus>(facet)
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.location.as_str()]
    }

    fn facet(&self) -> &str {
        self.status.token()
    }

    fn declares_facet(facet: &str) -> bool {
        is_declared_token::<ProjectStatus>(facet)
    }
}

// ==========================================
// ListFilter - 搜索 + 分面
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    query: String,         // 已规范化（去空白、小写）
    facet: Option<String>, // 已规范化; None = 全部
}

impl ListFilter {
    /// 无条件过滤器（匹配全部）
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.trim().to_lowercase();
        self
    }

    /// 设置分面; 空字符串视为"全部"
    pub fn with_facet(mut self, facet: Option<&str>) -> Self {
        self.facet = facet
            .map(|f| f.trim().to_lowercase())
            .filter(|f| !f.is_empty());
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.query.is_empty() && self.facet.is_none()
    }

    /// 单条记录是否命中
    ///
    /// 文本: 任一搜索字段包含 query（不区分大小写）
    /// 分面: 分面取值与 facet 相等（不区分大小写）
    pub fn matches<R: Searchable>(&self, record: &R) -> bool {
        if let Some(facet) = &self.facet {
            if record.facet().to_lowercase() != *facet {
                return false;
            }
        }

        if self.query.is_empty() {
            return true;
        }

        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.query))
    }

    /// 分面是否作用于该列表
    ///
    /// 分面取值属于该类记录的声明取值,或列表中有记录取该值时才生效
    pub fn facet_applies_to<R: Searchable>(&self, records: &[R]) -> bool {
        match &self.facet {
            None => false,
            Some(facet) => {
                R::declares_facet(facet)
                    || records.iter().any(|r| r.facet().to_lowercase() == *facet)
            }
        }
    }

    /// 按列表范围过滤: 分面只作用于其所属的列表,文本搜索作用于全部列表
    pub fn apply_scoped<'a, R: Searchable>(&self, records: &'a [R]) -> Vec<&'a R> {
        if self.facet.is_some() && !self.facet_applies_to(records) {
            let text_only = ListFilter {
                query: self.query.clone(),
                facet: None,
            };
            return text_only.apply(records);
        }
        self.apply(records)
    }

    /// 过滤记录列表（保持原顺序）
    pub fn apply<'a, R: Searchable>(&self, records: &'a [R]) -> Vec<&'a R> {
        let matched: Vec<&R> = records.iter().filter(|r| self.matches(*r)).collect();
        tracing::debug!(
            query = %self.query,
            facet = ?self.facet,
            total = records.len(),
            matched = matched.len(),
            "列表过滤"
        );
        matched
    }
}
