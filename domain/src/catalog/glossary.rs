//! Cheat-sheet content shown next to the case

/// One glossary term
#[derive(Debug, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub definition: &'static str,
}

pub static GLOSSARY: [GlossaryEntry; 7] = [
    GlossaryEntry {
        term: "GMV",
        definition: "成交总额：一段时间内的下单金额，总览生意规模。GMV = 单价 × 件数。",
    },
    GlossaryEntry {
        term: "CTR",
        definition: "点击率：点击 ÷ 展示。用户看见后有多少人点进来。",
    },
    GlossaryEntry {
        term: "CVR",
        definition: "转化率：成交 ÷ 点击。点进来后有多少人下单。",
    },
    GlossaryEntry {
        term: "ROI",
        definition: "投产比：产出 ÷ 投入。可用GMV或利润口径，需注明。",
    },
    GlossaryEntry {
        term: "占用资金",
        definition: "压在库存上的钱：预计销量 × 进货成本。",
    },
    GlossaryEntry {
        term: "资源坑位",
        definition: "平台/渠道的固定展示位置与时段，可能需坑位费或抽佣。",
    },
    GlossaryEntry {
        term: "私域",
        definition: "品牌可反复触达的用户池，如企业微信/社群/会员。",
    },
];

/// Model one-minute summary for the sunglasses case
pub const ONE_MINUTE_SCRIPT: &str = "我建议以【线上为主、线下辅助（80:20）】推进太阳镜。三点理由：第一，线上触达快、可按效果付费，目标CTR≥3%、CVR≥5%、整体ROI≥3；第二，线下主要承担试戴与背书，降低退换；第三，价格上标1500，大促到手1399/1299，预算按GMV的8%–10%投放。执行上，抖音/小红书种草，天猫/京东/自营承接转化，老客私域复购。";
