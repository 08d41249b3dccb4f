//! 公函 HTML 模板
//!
//! 模板只负责拼接字符串，渲染为 PDF 由 `render` 完成。

use crate::config::LetterConfig;
use crate::models::courses::entities::CourseType;
use crate::models::letters::{LetterContext, LetterKind, LetterLanguage, LetterRequest};
use crate::utils::thai_format::{
    buddhist_year, english_be_date, english_be_date_or_blank, semester_en, thai_date,
    thai_date_or_blank, to_thai_digits,
};

const STYLE: &str = r#"
  @page { size: A4; margin: 15mm 15mm 20mm 20mm; }
  body { font-family: "TH Sarabun New", "Sarabun", sans-serif; font-size: 16pt; line-height: 1.35; }
  .header { display: flex; justify-content: space-between; }
  .date { margin-top: 6mm; }
  h1 { font-size: 16pt; text-align: center; }
  .signature { margin-top: 15mm; width: fit-content; margin-left: auto; margin-right: 10mm; text-align: center; }
  .indent { text-indent: 5em; }
  .info { font-size: 11pt; color: #444; }
  .page-break { break-before: page; page-break-before: always; }
"#;

/// 转义插入 HTML 的文本
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn document(lang: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"{lang}\"><head><meta charset=\"utf-8\"/><style>{STYLE}</style></head><body>{body}</body></html>"
    )
}

fn address_block(lines: &[String]) -> String {
    lines
        .iter()
        .map(|l| escape(l))
        .collect::<Vec<_>>()
        .join("<br/>")
}

fn signer(name: &str, position: &str) -> String {
    let name = if name.is_empty() {
        "………………………………………".to_string()
    } else {
        escape(name)
    };
    format!("({name})<br/>{}", escape(position))
}

fn contact(cfg: &LetterConfig) -> String {
    let mut lines = Vec::new();
    if !cfg.contact_phone.is_empty() {
        lines.push(format!("Tel: {}", escape(&cfg.contact_phone)));
    }
    if !cfg.contact_email.is_empty() {
        lines.push(format!("Email: {}", escape(&cfg.contact_email)));
    }
    lines.join("<br/>")
}

/// 固定内容的泰文公函
pub fn static_letter(cfg: &LetterConfig) -> String {
    let body = format!(
        r#"<div class="header">
  <p>ที่ {prefix}/๐๐๐</p>
  <div>{faculty}<br/>{university}<br/>{address}</div>
</div>
<p>เรื่อง ขอความอนุเคราะห์รับนักศึกษาปฏิบัติงานสหกิจศึกษา</p>
<p>เรียน ผู้จัดการฝ่ายทรัพยากรบุคคล</p>
<p class="indent">ด้วย {faculty} {university} มีความประสงค์ให้นักศึกษาระดับปริญญาตรี
ได้มีโอกาสเข้าปฏิบัติงานในสถานประกอบการ เพื่อบูรณาการการเรียนกับการปฏิบัติงานจริง</p>
<p class="indent">จึงเรียนมาเพื่อโปรดพิจารณาให้ความอนุเคราะห์ และขอขอบคุณมา ณ โอกาสนี้</p>
<div class="signature"><p>ขอแสดงความนับถือ</p><br/>{signer}</div>
<p class="info">{contact}</p>"#,
        prefix = escape(&cfg.document_prefix),
        faculty = escape(&cfg.faculty_name_th),
        university = escape(&cfg.university_name_th),
        address = address_block(&cfg.address_th),
        signer = signer(&cfg.signer_name_th, &cfg.signer_position_th),
        contact = contact(cfg),
    );
    document("th", &body)
}

/// 根据选课信息生成公函
pub fn enrollment_letter(
    kind: LetterKind,
    lang: LetterLanguage,
    ctx: &LetterContext,
    req: &LetterRequest,
    cfg: &LetterConfig,
) -> String {
    let letter = LetterData::new(ctx, req, cfg);
    match (kind, lang) {
        (LetterKind::RequestCooperation, LetterLanguage::Th) => letter.request_cooperation_th(),
        (LetterKind::RequestCooperation, LetterLanguage::En) => letter.request_cooperation_en(),
        (LetterKind::Refer, LetterLanguage::Th) => letter.refer_th(),
        (LetterKind::Refer, LetterLanguage::En) => letter.refer_en(),
    }
}

/// 模板中用到的已转义字段
struct LetterData<'a> {
    cfg: &'a LetterConfig,
    is_coop: bool,
    prefix: String,
    doc_no: String,
    issue_date: chrono::NaiveDate,
    student_name: String,
    student_code: String,
    company_name_th: String,
    company_name_en: String,
    company_address: String,
    semester: i32,
    year: i32,
    start_date: Option<chrono::NaiveDate>,
    end_date: Option<chrono::NaiveDate>,
    course_name_en: String,
}

impl<'a> LetterData<'a> {
    fn new(ctx: &LetterContext, req: &LetterRequest, cfg: &'a LetterConfig) -> Self {
        let company_name_th = ctx
            .company
            .as_ref()
            .map(|c| c.company_name_th.clone())
            .unwrap_or_default();
        let company_name_en = ctx
            .company
            .as_ref()
            .and_then(|c| c.company_name_en.clone())
            .unwrap_or_else(|| company_name_th.clone());

        Self {
            cfg,
            is_coop: ctx.course.course_type == CourseType::Coop,
            prefix: escape(req.prefix.as_deref().unwrap_or_default()),
            doc_no: escape(&req.doc_no),
            issue_date: req.issue_date,
            student_name: escape(&ctx.student.full_name()),
            student_code: escape(&ctx.student.student_code),
            company_name_th: escape(&company_name_th),
            company_name_en: escape(&company_name_en),
            company_address: escape(
                ctx.company
                    .as_ref()
                    .and_then(|c| c.company_address.as_deref())
                    .unwrap_or_default(),
            ),
            semester: ctx.section.semester,
            year: ctx.section.year,
            start_date: ctx.training.as_ref().and_then(|t| t.start_date),
            end_date: ctx.training.as_ref().and_then(|t| t.end_date),
            course_name_en: escape(
                ctx.course
                    .course_name_en
                    .as_deref()
                    .unwrap_or(&ctx.course.course_name_th),
            ),
        }
    }

    fn thai_term(&self) -> (String, String) {
        (
            to_thai_digits(&self.semester.to_string()),
            to_thai_digits(&buddhist_year(self.year).to_string()),
        )
    }

    fn thai_header(&self) -> String {
        format!(
            r#"<div class="header">
  <p>ที่ {prefix}/{doc_no}</p>
  <div>{faculty}<br/>{university}<br/>{address}<div class="date">{date}</div></div>
</div>"#,
            prefix = escape(&self.cfg.document_prefix),
            doc_no = to_thai_digits(&self.doc_no),
            faculty = escape(&self.cfg.faculty_name_th),
            university = escape(&self.cfg.university_name_th),
            address = address_block(&self.cfg.address_th),
            date = thai_date(self.issue_date),
        )
    }

    fn english_header(&self) -> String {
        format!(
            r#"<div class="header">
  <p>No {prefix}/{doc_no}</p>
  <div>{faculty}<br/>{university}<br/>{address}<div class="date">{date}</div></div>
</div>"#,
            prefix = escape(&self.cfg.document_prefix),
            doc_no = self.doc_no,
            faculty = escape(&self.cfg.faculty_name_en),
            university = escape(&self.cfg.university_name_en),
            address = address_block(&self.cfg.address_en),
            date = english_be_date(self.issue_date),
        )
    }

    fn english_student(&self) -> String {
        if self.prefix.is_empty() {
            self.student_name.clone()
        } else {
            format!("{} {}", self.prefix, self.student_name)
        }
    }

    fn request_cooperation_th(&self) -> String {
        let program = if self.is_coop {
            "ปฏิบัติงานสหกิจศึกษา"
        } else {
            "ฝึกงานในสถานประกอบการ"
        };
        let (semester, year) = self.thai_term();
        let start = thai_date_or_blank(self.start_date);
        let end = thai_date_or_blank(self.end_date);

        let body = format!(
            r#"{header}
<p>เรื่อง ขอความอนุเคราะห์รับนักศึกษา{program}</p>
<p>เรียน {company}</p>
<p>สิ่งที่ส่งมาด้วย หนังสือตอบรับนักศึกษา{program} จำนวน ๑ ฉบับ</p>
<p class="indent">ด้วย {faculty} {university} มีความประสงค์ให้นักศึกษาระดับปริญญาตรี
ได้มีโอกาสเข้า{program}ในหน่วยงานของท่าน ในรายวิชา {course}
ซึ่งเป็นการจัดให้มีการบูรณาการการเรียนของนักศึกษากับการปฏิบัติงานเพื่อหาประสบการณ์จริงจากสถานประกอบการ</p>
<p class="indent">ในการนี้ คณะได้พิจารณาแล้วเห็นว่าการเข้า{program}ในหน่วยงานของท่าน จะเกิดประโยชน์แก่นักศึกษาเป็นอย่างยิ่ง
จึงขอความอนุเคราะห์ท่านรับนักศึกษา ภาคการศึกษาที่ {semester} ปีการศึกษา {year}
ตั้งแต่วันที่ {start} ถึงวันที่ {end}</p>
<p class="indent">จึงเรียนมาเพื่อโปรดพิจารณาให้ความอนุเคราะห์ หากผลการพิจารณาเป็นประการใด
กรุณาส่งหนังสือตอบรับที่แนบมาพร้อมนี้กลับมายัง {faculty} {university}</p>
<div class="signature"><p>ขอแสดงความนับถือ</p><br/>{signer}</div>
<p class="info">{contact}</p>
<div class="page-break">
  <h1>หนังสือตอบรับนักศึกษา{program}</h1>
  <div class="header"><p>ที่………………………………</p><p>{address}<br/>วันที่…………เดือน………………………พ.ศ…………</p></div>
  <p>เรื่อง การรับนักศึกษา{program}</p>
  <p>เรียน {signer_position}</p>
  <p>อ้างถึง หนังสือที่ {prefix}/{doc_no} ลงวันที่ {issue_date}</p>
  <p class="indent">ตามที่ท่านได้ขอความอนุเคราะห์รับนักศึกษาเข้า{program}ในหน่วยงานแห่งนี้ ในภาคการศึกษาที่ {semester}
  ปีการศึกษา {year} ตั้งแต่วันที่ {start} ถึงวันที่ {end} นั้น ทางหน่วยงานได้พิจารณาแล้ว เห็นว่า</p>
  <p class="indent">☐ ยินดีให้ความร่วมมือรับนักศึกษา จำนวน ๑ ราย คือ ๑. {student} ({code})</p>
  <p class="indent">☐ ไม่สามารถรับนักศึกษาได้</p>
  <div class="signature"><p>ขอแสดงความนับถือ</p><br/>(…………………………………………)<br/>ตำแหน่ง……………………………………<br/>กรุณาประทับตราหน่วยงาน</div>
</div>"#,
            header = self.thai_header(),
            company = self.company_name_th,
            faculty = escape(&self.cfg.faculty_name_th),
            university = escape(&self.cfg.university_name_th),
            course = self.course_name_en,
            signer = signer(&self.cfg.signer_name_th, &self.cfg.signer_position_th),
            signer_position = escape(&self.cfg.signer_position_th),
            contact = contact(self.cfg),
            address = self.company_address,
            prefix = escape(&self.cfg.document_prefix),
            doc_no = to_thai_digits(&self.doc_no),
            issue_date = thai_date(self.issue_date),
            student = self.student_name,
            code = to_thai_digits(&self.student_code),
        );
        document("th", &body)
    }

    fn request_cooperation_en(&self) -> String {
        let program = if self.is_coop {
            "cooperative education"
        } else {
            "an internship"
        };
        let start = english_be_date_or_blank(self.start_date);
        let end = english_be_date_or_blank(self.end_date);

        let body = format!(
            r#"{header}
<p>Subject: Request for Acceptance of Student Trainee</p>
<p>Dear {company},</p>
<p class="indent">The {faculty}, {university}, would like to request your kind permission for our student,
{student} (student ID {code}), to undertake {program} in the course {course} at your organization
during the {semester} semester of the {year} academic year, from {start} to {end}.</p>
<p class="indent">We would be grateful if you could return the enclosed acceptance form to the faculty.
Thank you for your kind consideration.</p>
<div class="signature"><p>Sincerely yours,</p><br/>{signer}</div>
<p class="info">{contact}</p>
<div class="page-break">
  <h1>Student Acceptance Form</h1>
  <p>To: {signer_position}</p>
  <p>Reference: letter No {prefix}/{doc_no} dated {issue_date}</p>
  <p class="indent">In reference to your request for our organization to accept your student for {program}
  during the {semester} semester of the academic year {year}, we have considered and</p>
  <p class="indent">☐ are pleased to accept {student}</p>
  <p class="indent">☐ are unable to accept the student</p>
  <div class="signature">(…………………………………………)<br/>Position……………………………………<br/>Company stamp</div>
</div>"#,
            header = self.english_header(),
            company = self.company_name_en,
            faculty = escape(&self.cfg.faculty_name_en),
            university = escape(&self.cfg.university_name_en),
            student = self.english_student(),
            code = self.student_code,
            course = self.course_name_en,
            semester = semester_en(self.semester),
            year = self.year,
            signer = signer(&self.cfg.signer_name_en, &self.cfg.signer_position_en),
            signer_position = escape(&self.cfg.signer_position_en),
            contact = contact(self.cfg),
            prefix = escape(&self.cfg.document_prefix),
            doc_no = self.doc_no,
            issue_date = english_be_date(self.issue_date),
        );
        document("en", &body)
    }

    fn refer_th(&self) -> String {
        let program = if self.is_coop {
            "ฝึกปฏิบัติงานสหกิจศึกษา"
        } else {
            "ฝึกงานในสถานประกอบการ"
        };
        let (semester, year) = self.thai_term();
        let start = thai_date_or_blank(self.start_date);
        let end = thai_date_or_blank(self.end_date);

        let body = format!(
            r#"{header}
<p>เรื่อง ขอส่งตัวนักศึกษาเข้า{program}</p>
<p>เรียน {company}</p>
<p class="indent">ตามที่ {company} ได้ให้ความอนุเคราะห์รับนักศึกษาของ{faculty} {university}
เข้า{program} นั้น</p>
<p class="indent">ในการนี้ คณะขอส่งตัว {student} ({code}) เพื่อรายงานตัวเข้ารับการ{program}
ในภาคเรียนที่ {semester} ปีการศึกษา {year} ตั้งแต่วันที่ {start} ถึงวันที่ {end}</p>
<p class="indent">จึงเรียนมาเพื่อโปรดทราบ และขอขอบคุณมา ณ โอกาสนี้</p>
<div class="signature"><p>ขอแสดงความนับถือ</p><br/>{signer}</div>
<p class="info">{contact}</p>"#,
            header = self.thai_header(),
            company = self.company_name_th,
            faculty = escape(&self.cfg.faculty_name_th),
            university = escape(&self.cfg.university_name_th),
            student = self.student_name,
            code = to_thai_digits(&self.student_code),
            signer = signer(&self.cfg.signer_name_th, &self.cfg.signer_position_th),
            contact = contact(self.cfg),
        );
        document("th", &body)
    }

    fn refer_en(&self) -> String {
        let program = if self.is_coop {
            "cooperative education internship"
        } else {
            "internship"
        };
        let start = english_be_date_or_blank(self.start_date);
        let end = english_be_date_or_blank(self.end_date);

        let body = format!(
            r#"{header}
<p>Subject: Request for Internship Program Student Placement</p>
<p>Dear {company},</p>
<p class="indent">Thank you for accepting our student to undertake {program} at your organization.
We are sending {student} (student ID {code}) to report for the {program} in the {semester} semester
of the academic year {year}, from {start} to {end}.</p>
<p class="indent">Upon completion, we kindly ask for your evaluation of the student's performance
using the evaluation form provided by the faculty.</p>
<p class="indent">We sincerely appreciate your support and hope for your continued collaboration.</p>
<div class="signature"><p>Sincerely yours,</p><br/>{signer}</div>
<p class="info">{contact}</p>"#,
            header = self.english_header(),
            company = self.company_name_en,
            student = self.english_student(),
            code = self.student_code,
            semester = semester_en(self.semester),
            year = self.year,
            signer = signer(&self.cfg.signer_name_en, &self.cfg.signer_position_en),
            contact = contact(self.cfg),
        );
        document("en", &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::companies::entities::Company;
    use crate::models::courses::entities::{Course, CourseSection};
    use crate::models::people::entities::Student;
    use crate::models::trainings::entities::StudentTraining;
    use chrono::{NaiveDate, Utc};

    fn context(course_type: CourseType) -> LetterContext {
        let now = Utc::now();
        LetterContext {
            student: Student {
                id: 1,
                user_id: 1,
                student_code: "6501001".to_string(),
                first_name: "Somchai".to_string(),
                middle_name: None,
                last_name: "<Jaidee>".to_string(),
                email: None,
                phone: None,
                gpax: None,
                faculty_id: None,
                program_id: None,
                curriculum_id: None,
                major_id: None,
                created_at: now,
                updated_at: now,
            },
            course: Course {
                id: 1,
                curriculum_id: None,
                course_code: "CP4001".to_string(),
                course_name_th: "สหกิจศึกษา".to_string(),
                course_name_en: Some("Co-operative Education".to_string()),
                course_type,
                credits: Some(6),
                description: None,
                created_at: now,
                updated_at: now,
            },
            section: CourseSection {
                id: 1,
                course_id: 1,
                section: 1,
                semester: 2,
                year: 2024,
                created_at: now,
                updated_at: now,
            },
            training: Some(StudentTraining {
                id: 1,
                student_enroll_id: 1,
                company_id: Some(1),
                document_language: Some("th".to_string()),
                start_date: NaiveDate::from_ymd_opt(2024, 11, 4),
                end_date: NaiveDate::from_ymd_opt(2025, 2, 28),
                coordinator: None,
                coordinator_phone_number: None,
                coordinator_email: None,
                supervisor: None,
                supervisor_phone_number: None,
                supervisor_email: None,
                department: None,
                position: None,
                job_description: None,
                created_at: now,
                updated_at: now,
            }),
            company: Some(Company {
                id: 1,
                company_register_number: None,
                company_name_th: "บริษัท ตัวอย่าง จำกัด".to_string(),
                company_name_en: Some("Example Co., Ltd.".to_string()),
                company_address: Some("Chiang Mai".to_string()),
                company_map: None,
                company_email: None,
                company_phone_number: None,
                company_type: None,
                created_at: now,
                updated_at: now,
            }),
        }
    }

    fn request() -> LetterRequest {
        LetterRequest {
            doc_no: "123".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2024, 9, 16).unwrap(),
            prefix: Some("Mr.".to_string()),
        }
    }

    #[test]
    fn test_thai_request_letter() {
        let html = enrollment_letter(
            LetterKind::RequestCooperation,
            LetterLanguage::Th,
            &context(CourseType::Coop),
            &request(),
            &LetterConfig::default(),
        );
        assert!(html.contains("ที่ อว๐๖๕๔.๐๒/๑๒๓"));
        assert!(html.contains("๑๖ กันยายน ๒๕๖๗"));
        assert!(html.contains("ปฏิบัติงานสหกิจศึกษา"));
        assert!(html.contains("ภาคการศึกษาที่ ๒ ปีการศึกษา ๒๕๖๗"));
        assert!(html.contains("เรียน บริษัท ตัวอย่าง จำกัด"));
        // 用户输入需要转义
        assert!(html.contains("&lt;Jaidee&gt;"));
        assert!(!html.contains("<Jaidee>"));
    }

    #[test]
    fn test_internship_wording() {
        let html = enrollment_letter(
            LetterKind::RequestCooperation,
            LetterLanguage::Th,
            &context(CourseType::Internship),
            &request(),
            &LetterConfig::default(),
        );
        assert!(html.contains("ฝึกงานในสถานประกอบการ"));
        assert!(!html.contains("ปฏิบัติงานสหกิจศึกษา"));
    }

    #[test]
    fn test_english_refer_letter() {
        let html = enrollment_letter(
            LetterKind::Refer,
            LetterLanguage::En,
            &context(CourseType::Coop),
            &request(),
            &LetterConfig::default(),
        );
        assert!(html.contains("Request for Internship Program Student Placement"));
        assert!(html.contains("Dear Example Co., Ltd."));
        assert!(html.contains("Mr. Somchai &lt;Jaidee&gt;"));
        assert!(html.contains("second semester"));
        assert!(html.contains("4 November B.E. 2567 (2024)"));
    }

    #[test]
    fn test_static_letter_is_thai() {
        let html = static_letter(&LetterConfig::default());
        assert!(html.contains("lang=\"th\""));
        assert!(html.contains("อว๐๖๕๔.๐๒"));
    }
}
