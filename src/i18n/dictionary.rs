use super::Language;
use std::collections::HashMap;
use std::sync::OnceLock;

pub type Dictionary = HashMap<&'static str, &'static str>;

static DICTIONARIES: OnceLock<HashMap<Language, Dictionary>> = OnceLock::new();

/// The flat key -> string table for `language`.
pub fn dictionary(language: Language) -> &'static Dictionary {
    let all = DICTIONARIES.get_or_init(|| {
        Language::ALL
            .into_iter()
            .map(|lang| (lang, entries(lang).iter().copied().collect()))
            .collect()
    });
    // every language is inserted above
    &all[&language]
}

fn entries(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::Vi => VI,
        Language::En => EN,
    }
}

const VI: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Trang Chủ"),
    ("nav.games", "Trò Chơi"),
    ("nav.about", "Về Chúng Tôi"),
    ("nav.contact", "Liên Hệ"),
    ("nav.recruitment", "Tuyển Dụng"),
    // Hero
    ("hero.slogan", "Kết nối. Sáng tạo. Bùng nổ!"),
    ("hero.subtitle", "Phát triển trò chơi đỉnh cao"),
    ("hero.cta", "Khám phá trò chơi"),
    // About
    ("about.title", "Về NexZap Studio"),
    (
        "about.description",
        "NexZap Studio là công ty phát triển trò chơi chuyên tạo ra những trải nghiệm tương tác hấp dẫn và sáng tạo. Chúng tôi kết hợp nghệ thuật, công nghệ và cốt truyện để mang đến những trò chơi đầy màu sắc và thú vị.",
    ),
    // Features
    ("features.title", "Điểm Mạnh Của Chúng Tôi"),
    ("features.creativity.title", "Sáng Tạo Không Giới Hạn"),
    (
        "features.creativity.desc",
        "Chúng tôi đẩy mạnh ranh giới của thiết kế trò chơi với ý tưởng sáng tạo và độc đáo.",
    ),
    ("features.tech.title", "Công Nghệ Tiên Tiến"),
    (
        "features.tech.desc",
        "Sử dụng công nghệ mới nhất để tạo ra trò chơi chất lượng cao với đồ họa tuyệt đẹp.",
    ),
    ("features.fun.title", "Ưu Tiên Sự Thú Vị"),
    (
        "features.fun.desc",
        "Chúng tôi luôn đặt niềm vui của người chơi lên hàng đầu trong mọi dự án.",
    ),
    // Games
    ("games.title", "Trò Chơi Mới Nhất"),
    ("games.viewAll", "Xem tất cả"),
    // Footer
    ("footer.rights", "© 2024 NexZap Studio. Tất cả quyền được bảo lưu."),
    ("footer.privacy", "Chính sách bảo mật"),
    ("footer.terms", "Điều khoản sử dụng"),
    ("footer.contact", "Liên hệ"),
    // Job details
    ("job.openPositions", "Vị Trí Đang Tuyển"),
    ("job.requirements", "Yêu Cầu"),
    ("job.responsibilities", "Trách Nhiệm"),
    ("job.benefits", "Quyền Lợi"),
    ("job.applyBy", "Ứng tuyển trước ngày"),
    ("job.apply", "Ứng tuyển vị trí này"),
    // Application form
    ("form.submit", "Gửi Hồ Sơ"),
    ("form.submitting", "Đang gửi hồ sơ..."),
    ("form.error.fullName", "Họ tên phải có ít nhất 2 ký tự."),
    ("form.error.email", "Vui lòng nhập địa chỉ email hợp lệ."),
    ("form.error.phone", "Số điện thoại phải có ít nhất 10 chữ số."),
    ("form.error.position", "Vị trí ứng tuyển phải có ít nhất 2 ký tự."),
    ("form.error.experience", "Mô tả kinh nghiệm phải có ít nhất 5 ký tự."),
    (
        "form.error.agreeToTerms",
        "Bạn phải đồng ý với các điều khoản và điều kiện.",
    ),
    ("form.error.fileTooLarge", "Kích thước tệp phải nhỏ hơn 5MB"),
    ("form.error.unsupportedFileType", "Tệp phải là PDF hoặc tài liệu Word"),
    ("form.error.resumeRequired", "Vui lòng tải lên CV của bạn"),
    (
        "application.success",
        "Gửi hồ sơ thành công! Chúng tôi sẽ sớm xem xét hồ sơ của bạn.",
    ),
    (
        "application.failure",
        "Không thể gửi hồ sơ. Vui lòng thử lại sau.",
    ),
];

const EN: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.games", "Games"),
    ("nav.about", "About"),
    ("nav.contact", "Contact"),
    ("nav.recruitment", "Careers"),
    // Hero
    ("hero.slogan", "Connect. Create. Explode!"),
    ("hero.subtitle", "Premium Game Development"),
    ("hero.cta", "Explore Games"),
    // About
    ("about.title", "About NexZap Studio"),
    (
        "about.description",
        "NexZap Studio is a game development company focused on creating engaging and innovative interactive experiences. We combine art, technology, and storytelling to deliver colorful and exciting games.",
    ),
    // Features
    ("features.title", "Our Strengths"),
    ("features.creativity.title", "Boundless Creativity"),
    (
        "features.creativity.desc",
        "We push the boundaries of game design with creative and unique ideas.",
    ),
    ("features.tech.title", "Advanced Technology"),
    (
        "features.tech.desc",
        "Using the latest technology to create high-quality games with stunning graphics.",
    ),
    ("features.fun.title", "Fun First"),
    (
        "features.fun.desc",
        "We always prioritize player enjoyment in every project we undertake.",
    ),
    // Games
    ("games.title", "Latest Games"),
    ("games.viewAll", "View all"),
    // Footer
    ("footer.rights", "© 2024 NexZap Studio. All rights reserved."),
    ("footer.privacy", "Privacy Policy"),
    ("footer.terms", "Terms of Service"),
    ("footer.contact", "Contact Us"),
    // Job details
    ("job.openPositions", "Open Positions"),
    ("job.requirements", "Requirements"),
    ("job.responsibilities", "Responsibilities"),
    ("job.benefits", "Benefits"),
    ("job.applyBy", "Apply by"),
    ("job.apply", "Apply for this position"),
    // Application form
    ("form.submit", "Submit Application"),
    ("form.submitting", "Submitting Application..."),
    ("form.error.fullName", "Full name must be at least 2 characters."),
    ("form.error.email", "Please enter a valid email address."),
    ("form.error.phone", "Phone number must be at least 10 digits."),
    ("form.error.position", "Position must be at least 2 characters."),
    (
        "form.error.experience",
        "Experience details must be at least 5 characters.",
    ),
    (
        "form.error.agreeToTerms",
        "You must agree to the terms and conditions.",
    ),
    ("form.error.fileTooLarge", "File size must be less than 5MB"),
    ("form.error.unsupportedFileType", "File must be PDF or Word document"),
    ("form.error.resumeRequired", "Please upload your resume"),
    (
        "application.success",
        "Application submitted successfully! We'll review your application soon.",
    ),
    (
        "application.failure",
        "Failed to submit application. Please try again later.",
    ),
];
