//! Discussion case catalog

use crate::core::error::DomainError;

/// A discussion case. Selected, never mutated.
#[derive(Debug, PartialEq, Eq)]
pub struct Case {
    pub id: &'static str,
    pub title: &'static str,
    pub prompt: &'static str,
    /// Figures and constraints handed to the candidates
    pub data: &'static str,
    pub deliverables: &'static [&'static str],
}

pub static CASES: [Case; 3] = [
    Case {
        id: "glasses_online_offline",
        title: "眼镜公司：线上 vs 线下（太阳镜为主推）",
        prompt: "你所在的眼镜公司准备在夏季主推时尚太阳镜。请在【线上 vs 线下】中选择主渠道并论证分配比例（例如 80:20），给出投放节奏与KPI（CTR、CVR、ROI），以及线下试戴/合作门店的方案。",
        data: "给定数据：售价1500元，进货成本500元，预计销量3500件；大促到手价建议1399/1299两档。站内抽佣约10%，退换率2%–5%。目标：整体ROI≥3，CTR≥3%，CVR≥5%。",
        deliverables: &[
            "一句话结论：线上为主、线下辅助（建议80:20）",
            "理由：触达速度、成本可控、内容转化；线下用于试戴背书",
            "价格与预算：按GMV的8%–10%投放，明确到手价与利润边界",
            "KPI：CTR/CVR/ROI目标",
            "周度节奏：素材→种草→承接→复盘",
        ],
    },
    Case {
        id: "selection_roi",
        title: "选品对比：机械表/太阳镜/智能眼镜",
        prompt: "在三类目中选一个作为主推，并用数据说明理由（利润、占用资金、ROI、风险）。",
        data: "题面参数：机械表：销量1200、售价5000、利润率40%、进货2000；太阳镜：销量3500、售价1500、利润率50%、进货500；智能眼镜：销量800、售价3000、利润率30%、进货1000。",
        deliverables: &[
            "计算总利润、占用资金、ROI",
            "下结论并说明为什么不是另两个",
            "提出简要营销打法（人-货-场-钱）",
        ],
    },
    Case {
        id: "campaign_618",
        title: "618活动：价格阶梯与预算分配",
        prompt: "为夏季太阳镜制定618活动方案：给出价格阶梯、套装/加价购、预算分配（站内/站外/私域）、达人策略与KPI。",
        data: "到手价建议1399/1299；预算可按GMV的8%–10%投入；达人以中腰部为主+垂类KOL测试。目标ROI≥3。",
        deliverables: &[
            "价格与权益组合",
            "渠道预算比例",
            "达人与内容方向",
            "KPI与复盘方法",
        ],
    },
];

impl Case {
    /// The case selected when nothing else is configured
    pub fn default_case() -> &'static Case {
        &CASES[0]
    }

    /// Look up a case by id.
    pub fn find(id: &str) -> Result<&'static Case, DomainError> {
        CASES
            .iter()
            .find(|c| c.id == id.trim())
            .ok_or_else(|| DomainError::UnknownCase(id.to_string()))
    }

    /// The case after this one in catalog order, wrapping around.
    pub fn next_in_catalog(&self) -> &'static Case {
        let index = CASES.iter().position(|c| c.id == self.id).unwrap_or(0);
        &CASES[(index + 1) % CASES.len()]
    }
}
