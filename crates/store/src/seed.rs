//! Example catalog used when the service starts without an external source.

use devinterview_core::category::Category;

use crate::models::question::{LearningResource, Question};

fn question(
    id: i64,
    title: &str,
    category: Category,
    model_answer: &str,
    deep_dive: &str,
    learning_resources: Vec<LearningResource>,
) -> Question {
    Question {
        id,
        title: title.to_string(),
        category,
        model_answer: model_answer.to_string(),
        deep_dive: deep_dive.to_string(),
        learning_resources,
        created_at: None,
        updated_at: None,
    }
}

/// The five example questions, one per category, ids 1 through 5.
pub fn example_questions() -> Vec<Question> {
    vec![
        question(
            1,
            "JVM의 메모리 구조에 대해 설명해주세요.",
            Category::Backend,
            "JVM의 메모리 영역은 크게 5가지로 나뉩니다.\n\n\
             1. **Method Area (메서드 영역)**: 클래스 수준의 정보를 저장합니다. 클래스 메타데이터, 상수 풀, static 변수 등이 저장됩니다.\n\n\
             2. **Heap (힙 영역)**: 객체 인스턴스와 배열이 저장되는 영역입니다. Garbage Collection의 주요 대상이며, Young Generation과 Old Generation으로 나뉩니다.\n\n\
             3. **Stack (스택 영역)**: 각 스레드마다 독립적으로 할당되며, 메서드 호출 시 지역변수, 매개변수, 리턴 주소 등이 저장됩니다.\n\n\
             4. **PC Register**: 현재 실행 중인 JVM 명령어의 주소를 저장합니다.\n\n\
             5. **Native Method Stack**: JNI(Java Native Interface)를 통해 호출되는 네이티브 메서드들을 위한 스택입니다.",
            "## JVM 메모리 구조 심화 분석\n\n\
             ### Method Area 상세\n\
             Method Area는 JVM이 시작될 때 생성되며, 모든 스레드가 공유하는 영역입니다.\n\n\
             - **Runtime Constant Pool**: 클래스 파일의 상수 풀이 로드되는 곳\n\
             - **Method Code**: 메서드의 바이트코드가 저장되는 곳\n\
             - **Field Information**: 클래스의 필드 정보\n\n\
             ### Heap 영역의 세부 구조\n\n\
             #### Young Generation\n\
             - **Eden Space**: 새로 생성된 객체들이 위치\n\
             - **Survivor Space (S0, S1)**: Eden에서 살아남은 객체들이 이동\n\n\
             #### Old Generation\n\
             - **Tenured Space**: 여러 번의 GC에서 살아남은 객체들이 위치\n\n\
             ### Garbage Collection과의 관계\n\
             - Young Generation: Minor GC (빠른 수집)\n\
             - Old Generation: Major GC (전체 수집, 시간 소요)",
            vec![
                LearningResource::new(
                    "Oracle JVM Specification",
                    "https://docs.oracle.com/javase/specs/jvms/se11/html/",
                )
                .with_description("JVM의 공식 명세서"),
                LearningResource::new(
                    "[블로그] JVM 메모리 구조 완벽 분석",
                    "https://d2.naver.com/helloworld/1329",
                )
                .with_description("네이버 D2에서 제공하는 상세한 JVM 메모리 분석"),
                LearningResource::new(
                    "Baeldung - JVM Memory Model",
                    "https://www.baeldung.com/java-jvm-memory-model",
                )
                .with_description("실전 예제와 함께하는 JVM 메모리 모델 설명"),
            ],
        ),
        question(
            2,
            "React의 Virtual DOM은 어떻게 동작하나요?",
            Category::Frontend,
            "Virtual DOM은 실제 DOM의 가상 표현으로, 메모리에 저장됩니다. React는 상태 변경 시 새로운 Virtual DOM 트리를 생성하고...",
            "Virtual DOM의 diff 알고리즘과 reconciliation 과정...",
            Vec::new(),
        ),
        question(
            3,
            "데이터베이스 인덱스의 종류와 특징을 설명해주세요.",
            Category::Database,
            "데이터베이스 인덱스는 크게 클러스터드 인덱스와 논클러스터드 인덱스로 나뉩니다...",
            "B+ Tree 구조와 인덱스 최적화 전략...",
            Vec::new(),
        ),
        question(
            4,
            "마이크로서비스 아키텍처의 장단점은 무엇인가요?",
            Category::SystemDesign,
            "마이크로서비스는 애플리케이션을 작은 독립적인 서비스들로 분할하는 아키텍처 패턴입니다...",
            "서비스 간 통신, 데이터 일관성, 분산 시스템의 복잡성...",
            Vec::new(),
        ),
        question(
            5,
            "Binary Search Tree의 시간 복잡도를 분석해주세요.",
            Category::DataStructures,
            "BST의 시간 복잡도는 트리의 높이에 따라 달라집니다. 균형 잡힌 트리에서는 O(log n)이지만...",
            "AVL Tree, Red-Black Tree 등 자가 균형 트리의 필요성...",
            Vec::new(),
        ),
    ]
}
