//! Static display-string table for both supported languages. Lookup misses
//! fall back to the primary language, then to the key itself, so rendering
//! never fails on a missing entry.

use crate::i18n::{Language, FALLBACK};

pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    lookup(lang, key)
        .or_else(|| lookup(FALLBACK, key))
        .unwrap_or(key)
}

fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    match lang {
        Language::Zh => zh(key),
        Language::En => en(key),
    }
}

fn zh(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.showcase" => "作品展示",
        "nav.solutions" => "解决方案",
        "nav.innovation" => "创新实验",
        "nav.about" => "关于我们",
        "nav.tagline" => "下一代网络 © 2026",

        "hero.badge" => "2026 丙午马年",
        "hero.title.top" => "马到成功",
        "hero.title.accent" => "龙腾盛世。",
        "hero.subtitle.lead" => "Gudupao Spark 祝您在 2026 丙午马年里：",
        "hero.subtitle.highlight" => "一马当先",
        "hero.subtitle.tail" => "，万事顺遂，创意如泉涌，梦想皆成真。",
        "hero.cta.primary" => "开启新年好运",
        "hero.cta.secondary" => "查看年度回顾",

        "features.tag" => "Features",
        "features.title.pre" => "马年",
        "features.title.accent" => "限定",
        "features.title.post" => "特权",
        "features.subtitle" => "为社区成员量身定制的专属福利与技术支持，助您在新的一年里突飞猛进。",
        "features.1.title" => "龙腾马跃",
        "features.1.desc" => "传承中华文化，融合现代设计，展现不一样的马年风采。",
        "features.2.title" => "一马当先",
        "features.2.desc" => "在技术的赛道上飞速驰骋，保持领先的探索精神与创新动力。",
        "features.3.title" => "万马奔腾",
        "features.3.desc" => "携手社区伙伴，共同构建更加繁荣、开放的数字未来。",
        "features.4.title" => "金马报喜",
        "features.4.desc" => "为您带来全方位的系统状态监控与服务保障，时刻守护在线体验。",
        "features.5.title" => "马不停蹄",
        "features.5.desc" => "持续迭代产品，优化用户体验，我们的脚步从未停止。",
        "features.6.title" => "天马行空",
        "features.6.desc" => "打破想象的边界，探索前沿科技，让创意在指尖起舞。",

        "showcase.tag" => "Showcase",
        "showcase.title.pre" => "社区",
        "showcase.title.accent" => "高光",
        "showcase.title.post" => "时刻",
        "showcase.subtitle" => "回顾过去一年的精彩瞬间，展望未来的无限可能。每一个项目都凝聚着开发者的智慧与热情。",
        "showcase.more" => "查看更多作品",
        "showcase.featured.tag" => "Featured Project",
        "showcase.featured.title" => "开源社区贡献榜",
        "showcase.featured.desc" => "记录每一位为社区付出心血的开发者，你们是最大的英雄。",
        "showcase.summit.title" => "年度技术峰会",
        "showcase.summit.sub" => "2025.12.12 - Guangzhou",
        "showcase.hackathon.title" => "黑客松挑战赛",
        "showcase.hackathon.sub" => "Code the Future",

        "about.tag" => "About Us",
        "about.title.pre" => "一群",
        "about.title.accent" => "追逐光",
        "about.title.post" => "的人",
        "about.body" => "Gudupao Spark 成立于 2024 年，我们致力于构建最开放、最前沿的技术社区。在这里，每一行代码都充满温度，每一个创意都值得被看见。",
        "about.stat.members" => "社区成员",
        "about.stat.projects" => "开源项目",
        "about.stat.passion" => "热情投入",

        "home.blessing" => "祝您马年大吉 · 万事如意",

        "footer.company" => "公司",
        "footer.about" => "关于",
        "footer.projects" => "项目",
        "footer.contact" => "联系",
        "footer.follow" => "关注我们",
        "footer.contactinfo" => "联系方式",
        "footer.address" => "中国广东省广州市",
        "footer.rights" => "版权所有。",

        "welcome.title" => "欢迎来到马年",
        "welcome.body" => "新的一年，新的起点。愿您一马当先，万事如意。",
        "welcome.home" => "进入主页",

        "error.notFound" => "页面未找到",
        "error.notFoundDesc" => "您访问的页面不存在，或者已经被移动到别处。",
        "error.goHome" => "返回首页",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.showcase" => "Showcase",
        "nav.solutions" => "Solutions",
        "nav.innovation" => "Innovation",
        "nav.about" => "About",
        "nav.tagline" => "Next Generation Web © 2026",

        "hero.badge" => "2026 Year of the Horse",
        "hero.title.top" => "Gallop Ahead",
        "hero.title.accent" => "Into a Golden Year.",
        "hero.subtitle.lead" => "Gudupao Spark wishes you a brilliant Year of the Horse:",
        "hero.subtitle.highlight" => "lead the field",
        "hero.subtitle.tail" => ", let ideas flow, and watch every dream come true.",
        "hero.cta.primary" => "Start the New Year",
        "hero.cta.secondary" => "See the Year in Review",

        "features.tag" => "Features",
        "features.title.pre" => "Horse-Year ",
        "features.title.accent" => "Limited",
        "features.title.post" => " Perks",
        "features.subtitle" => "Benefits and technical support tailored for our community, to help you surge ahead in the new year.",
        "features.1.title" => "Dragon and Horse",
        "features.1.desc" => "Chinese heritage meets modern design for a Year of the Horse like no other.",
        "features.2.title" => "First Out of the Gate",
        "features.2.desc" => "Race ahead on the technology track with relentless curiosity and drive.",
        "features.3.title" => "Ten Thousand Horses",
        "features.3.desc" => "Building a more open, more prosperous digital future with our community.",
        "features.4.title" => "Golden Tidings",
        "features.4.desc" => "Full system status monitoring and service guarantees, guarding your experience around the clock.",
        "features.5.title" => "Never Standing Still",
        "features.5.desc" => "Continuous iteration and polish — our pace never slows.",
        "features.6.title" => "Unbridled Imagination",
        "features.6.desc" => "Break past the edges of imagination and let creativity dance at your fingertips.",

        "showcase.tag" => "Showcase",
        "showcase.title.pre" => "Community ",
        "showcase.title.accent" => "Highlight",
        "showcase.title.post" => " Moments",
        "showcase.subtitle" => "A look back at the past year's best moments and the possibilities ahead. Every project carries its builders' craft and heart.",
        "showcase.more" => "See more work",
        "showcase.featured.tag" => "Featured Project",
        "showcase.featured.title" => "Open Source Contributor Board",
        "showcase.featured.desc" => "Honoring every developer who poured their heart into the community — you are the real heroes.",
        "showcase.summit.title" => "Annual Tech Summit",
        "showcase.summit.sub" => "2025.12.12 - Guangzhou",
        "showcase.hackathon.title" => "Hackathon Challenge",
        "showcase.hackathon.sub" => "Code the Future",

        "about.tag" => "About Us",
        "about.title.pre" => "The people ",
        "about.title.accent" => "chasing light",
        "about.title.post" => "",
        "about.body" => "Founded in 2024, Gudupao Spark builds the most open, forward-looking technology community we can. Here every line of code has warmth, and every idea deserves to be seen.",
        "about.stat.members" => "Members",
        "about.stat.projects" => "Projects",
        "about.stat.passion" => "Passion",

        "home.blessing" => "Wishing you great fortune in the Year of the Horse",

        "footer.company" => "Company",
        "footer.about" => "About",
        "footer.projects" => "Projects",
        "footer.contact" => "Contact",
        "footer.follow" => "Follow Us",
        "footer.contactinfo" => "Contact Info",
        "footer.address" => "Guangdong Province, Guangzhou, China",
        "footer.rights" => "All rights reserved.",

        "welcome.title" => "Welcome to the Year of the Horse",
        "welcome.body" => "A new year, a fresh start. May you lead the field and find fortune in everything.",
        "welcome.home" => "Enter the site",

        "error.notFound" => "Page Not Found",
        "error.notFoundDesc" => "The page you are looking for doesn't exist or has been moved.",
        "error.goHome" => "Go Home",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_languages_cover_the_same_keys() {
        // Spot-check a key from every section.
        for key in [
            "nav.showcase",
            "hero.badge",
            "features.6.desc",
            "showcase.featured.title",
            "about.body",
            "footer.rights",
            "welcome.title",
            "error.goHome",
        ] {
            assert!(zh(key).is_some(), "missing zh entry for {key}");
            assert!(en(key).is_some(), "missing en entry for {key}");
        }
    }

    #[test]
    fn unknown_keys_echo_back() {
        assert_eq!(translate(Language::En, "no.such.key"), "no.such.key");
    }

    #[test]
    fn lookup_is_per_language() {
        assert_eq!(translate(Language::Zh, "error.notFound"), "页面未找到");
        assert_eq!(translate(Language::En, "error.notFound"), "Page Not Found");
    }
}
