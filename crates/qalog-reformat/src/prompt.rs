//! Reformatting prompt construction.

use crate::log::LogEntry;

/// Line prefix marking a section heading in the reformatted markdown.
pub const HEADING_MARKER: &str = "### ";

/// Line prefix marking a list item in the reformatted markdown.
pub const LIST_MARKER: &str = "- ";

/// Section headings the reformatted answer is organized under, in order.
pub const SECTION_HEADINGS: [&str; 4] = ["질문 요지", "답변 내용", "핵심 정리", "참고 사항"];

/// Build the reformatting prompt for a log entry.
pub fn build_prompt(entry: &LogEntry) -> String {
    build_prompt_parts(&entry.question, &entry.answer)
}

/// Build the reformatting prompt from a question and its raw answer.
///
/// Both are embedded verbatim.
pub fn build_prompt_parts(question: &str, answer: &str) -> String {
    let sections: String = SECTION_HEADINGS
        .iter()
        .map(|heading| format!("{HEADING_MARKER}{heading}\n"))
        .collect();

    format!(
        "다음 질문과 답변을 읽기 쉬운 노트로 다시 정리해 주세요.\n\
         \n\
         규칙:\n\
         {LIST_MARKER}아래 네 개의 섹션 제목을 이 순서 그대로, 정확히 한 번씩 사용하세요.\n\
         {LIST_MARKER}섹션 제목은 줄 앞에 \"{heading}\"를 붙여 쓰세요.\n\
         {LIST_MARKER}목록 항목은 줄 앞에 \"{list}\"를 붙여 쓰세요. 중첩 목록은 쓰지 마세요.\n\
         {LIST_MARKER}굵게, 기울임, 링크, 코드 블록 같은 다른 마크다운 서식은 쓰지 마세요.\n\
         {LIST_MARKER}정리된 노트만 출력하고 다른 설명은 덧붙이지 마세요.\n\
         \n\
         섹션:\n\
         {sections}\
         \n\
         [질문]\n\
         {question}\n\
         \n\
         [답변]\n\
         {answer}\n",
        heading = HEADING_MARKER.trim_end(),
        list = LIST_MARKER.trim_end(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_question_and_answer_verbatim() {
        let entry = LogEntry {
            question: "What is X?".to_owned(),
            answer: "X is Y.\nX is also Z.".to_owned(),
        };

        let prompt = build_prompt(&entry);

        assert!(prompt.contains("[질문]\nWhat is X?\n"));
        assert!(prompt.contains("[답변]\nX is Y.\nX is also Z.\n"));
    }

    #[test]
    fn test_prompt_lists_all_sections_in_order() {
        let prompt = build_prompt_parts("q", "a");

        let positions: Vec<usize> = SECTION_HEADINGS
            .iter()
            .map(|heading| {
                prompt
                    .find(&format!("{HEADING_MARKER}{heading}\n"))
                    .unwrap_or_else(|| panic!("missing section {heading}"))
            })
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_prompt_names_both_markers() {
        let prompt = build_prompt_parts("q", "a");

        assert!(prompt.contains("\"###\""));
        assert!(prompt.contains("\"-\""));
    }

    #[test]
    fn test_prompt_keeps_shell_unsafe_characters() {
        let question = "Why does `echo \"$HOME\"` print '~'?";
        let prompt = build_prompt_parts(question, "Because\n$HOME is expanded.");

        assert!(prompt.contains(question));
        assert!(prompt.contains("Because\n$HOME is expanded."));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt_parts("q", "a"), build_prompt_parts("q", "a"));
    }
}
