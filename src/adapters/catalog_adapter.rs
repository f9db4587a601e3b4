//! Builtin instrument catalog used when no registry file is configured.
//!
//! Ids are assigned 1.. in catalog order.

use crate::domain::error::SynthError;
use crate::domain::instrument::Instrument;
use crate::ports::instrument_port::InstrumentPort;

const CATALOG: &[(&str, &str)] = &[
    ("BABA", "阿里巴巴"),
    ("600519", "贵州茅台"),
    ("000858", "五粮液"),
    ("601318", "中国平安"),
    ("600036", "招商银行"),
    ("000333", "美的集团"),
    ("600276", "恒瑞医药"),
    ("601888", "中国中免"),
    ("000651", "格力电器"),
    ("601166", "兴业银行"),
    ("TCEHY", "腾讯控股"),
    ("601398", "工商银行"),
    ("600887", "伊利股份"),
    ("BIDU", "百度"),
    ("PDD", "拼多多"),
    ("002594", "比亚迪"),
    ("600030", "中信证券"),
    ("601288", "农业银行"),
    ("000568", "泸州老窖"),
    ("JD", "京东"),
    ("601899", "紫金矿业"),
    ("603259", "药明康德"),
    ("002475", "立讯精密"),
    ("600009", "上海机场"),
    ("000001", "平安银行"),
    ("NIO", "蔚来汽车"),
    ("601857", "中国石油"),
    ("600309", "万华化学"),
    ("NTES", "网易"),
    ("601988", "中国银行"),
    ("600585", "海螺水泥"),
    ("601238", "广汽集团"),
    ("601088", "中国神华"),
    ("600104", "上汽集团"),
    ("600048", "保利发展"),
    ("601668", "中国建筑"),
    ("601628", "中国人寿"),
    ("601601", "中国太保"),
    ("601818", "光大银行"),
    ("600028", "中国石化"),
    ("600809", "山西汾酒"),
    ("600690", "海尔智家"),
    ("601336", "新华保险"),
    ("601328", "交通银行"),
    ("600031", "三一重工"),
    ("002714", "牧原股份"),
    ("002352", "顺丰控股"),
    ("603799", "华友钴业"),
    ("600438", "通威股份"),
    ("603501", "韦尔股份"),
    ("XPEV", "小鹏汽车"),
    ("LI", "理想汽车"),
    ("BILI", "哔哩哔哩"),
    ("TME", "腾讯音乐"),
    ("YUMC", "百胜中国"),
    ("000725", "京东方A"),
    ("002415", "海康威视"),
    ("601919", "中远海控"),
    ("600050", "中国联通"),
    ("600019", "宝钢股份"),
    ("600029", "南方航空"),
    ("600406", "国电南瑞"),
    ("601985", "中国核电"),
    ("601766", "中国中车"),
    ("600547", "山东黄金"),
    ("600660", "福耀玻璃"),
    ("601012", "隆基绿能"),
    ("600745", "闻泰科技"),
    ("600989", "宝丰能源"),
    ("601633", "长城汽车"),
    ("601229", "上海银行"),
    ("002271", "东方雨虹"),
    ("603986", "兆易创新"),
    ("601117", "中国化学"),
    ("002142", "宁波银行"),
    ("600754", "锦江酒店"),
    ("601111", "中国国航"),
    ("600600", "青岛啤酒"),
    ("600487", "亨通光电"),
    ("000776", "广发证券"),
    ("600999", "招商证券"),
    ("600196", "复星医药"),
    ("600011", "华能国际"),
    ("601688", "华泰证券"),
    ("002230", "科大讯飞"),
    ("600900", "长江电力"),
    ("000063", "中兴通讯"),
    ("000895", "双汇发展"),
    ("600115", "东方航空"),
    ("600893", "航发动力"),
    ("601211", "国泰君安"),
    ("601066", "中信建投"),
    ("600837", "海通证券"),
    ("603288", "海天味业"),
    ("002202", "金风科技"),
    ("600436", "片仔癀"),
    ("601225", "陕西煤业"),
    ("601865", "福莱特"),
    ("002841", "视源股份"),
    ("603899", "晨光文具"),
];

pub struct CatalogAdapter {
    instruments: Vec<Instrument>,
}

impl CatalogAdapter {
    pub fn new() -> Self {
        let instruments = CATALOG
            .iter()
            .zip(1u32..)
            .map(|(&(symbol, name), id)| Instrument::new(id, symbol, name))
            .collect();
        Self { instruments }
    }
}

impl Default for CatalogAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl InstrumentPort for CatalogAdapter {
    fn find_instrument(&self, id_or_symbol: &str) -> Result<Instrument, SynthError> {
        self.instruments
            .iter()
            .find(|i| i.matches(id_or_symbol))
            .cloned()
            .ok_or_else(|| SynthError::InstrumentNotFound {
                id: id_or_symbol.to_string(),
            })
    }

    fn list_instruments(&self) -> Result<Vec<Instrument>, SynthError> {
        Ok(self.instruments.clone())
    }
}
